use clap::ValueEnum;
use serde::Deserialize;

/// How forgiving a round is. Cycles Easy -> Medium -> Hard -> Easy.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Deserialize,
    ValueEnum,
    strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

/// Per-difficulty multipliers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Factors {
    /// mistakes allowed per letter of the word
    pub attempts: f64,
    /// score multiplier applied to 10 points per letter
    pub score: f64,
}

const FACTORS: [(Difficulty, Factors); 3] = [
    (
        Difficulty::Easy,
        Factors {
            attempts: 3.0,
            score: 1.0,
        },
    ),
    (
        Difficulty::Medium,
        Factors {
            attempts: 2.0,
            score: 1.5,
        },
    ),
    (
        Difficulty::Hard,
        Factors {
            attempts: 1.5,
            score: 2.0,
        },
    ),
];

const POINTS_PER_LETTER: f64 = 10.0;

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn next(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }

    pub fn factors(self) -> Factors {
        FACTORS[self as usize].1
    }
}

fn letter_count(word: &str) -> usize {
    word.chars().count()
}

/// Mistakes budget for a fresh round: `max(1, round(len * factor))`,
/// rounding halves to even.
pub fn attempts_for(word: &str, difficulty: Difficulty) -> u32 {
    let raw = letter_count(word) as f64 * difficulty.factors().attempts;
    (raw.round_ties_even() as u32).max(1)
}

/// Points awarded for solving `word`: `floor(len * 10 * factor)`.
pub fn points_for(word: &str, difficulty: Difficulty) -> u32 {
    let raw = letter_count(word) as f64 * POINTS_PER_LETTER * difficulty.factors().score;
    raw.floor() as u32
}
