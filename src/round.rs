use std::collections::BTreeSet;
use std::time::{Duration, Instant};

use itertools::Itertools;

use crate::{
    difficulty::{attempts_for, Difficulty},
    word_bank::WordEntry,
};

#[derive(Clone, Debug, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum Outcome {
    Playing,
    Won,
    Lost,
    TimedOut,
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        self != Outcome::Playing
    }
}

/// What a single letter did to the round
#[derive(Clone, Debug, Copy, PartialEq, Eq)]
pub enum Guess {
    /// not a letter, already tried, or the round is over
    Ignored,
    Hit,
    Miss,
}

/// One play-through of a single word
#[derive(Clone, Debug)]
pub struct RoundState {
    entry: WordEntry,
    guessed_letters: BTreeSet<char>,
    wrong_letters: BTreeSet<char>,
    attempts_left: u32,
    started_at: Instant,
    outcome: Outcome,
}

/// Uppercases `c` if it is a letter with a single-char uppercase form
pub fn fold_letter(c: char) -> Option<char> {
    if !c.is_alphabetic() {
        return None;
    }
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => Some(u),
        _ => None,
    }
}

impl RoundState {
    pub fn new(entry: WordEntry, difficulty: Difficulty, started_at: Instant) -> Self {
        let attempts_left = attempts_for(entry.word(), difficulty);
        Self {
            entry,
            guessed_letters: BTreeSet::new(),
            wrong_letters: BTreeSet::new(),
            attempts_left,
            started_at,
            outcome: Outcome::Playing,
        }
    }

    pub fn entry(&self) -> &WordEntry {
        &self.entry
    }

    pub fn word(&self) -> &str {
        self.entry.word()
    }

    pub fn question(&self) -> &str {
        self.entry.question()
    }

    pub fn guessed_letters(&self) -> &BTreeSet<char> {
        &self.guessed_letters
    }

    pub fn wrong_letters(&self) -> &BTreeSet<char> {
        &self.wrong_letters
    }

    pub fn attempts_left(&self) -> u32 {
        self.attempts_left
    }

    pub fn started_at(&self) -> Instant {
        self.started_at
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_playing(&self) -> bool {
        self.outcome == Outcome::Playing
    }

    pub fn has_tried(&self, letter: char) -> bool {
        self.guessed_letters.contains(&letter) || self.wrong_letters.contains(&letter)
    }

    pub fn is_solved(&self) -> bool {
        self.entry
            .word()
            .chars()
            .all(|c| self.guessed_letters.contains(&c))
    }

    /// Records a letter without deciding the outcome. The caller decides
    /// whether a hit solved the word or a miss exhausted the budget.
    pub(crate) fn record(&mut self, c: char) -> Guess {
        if !self.is_playing() {
            return Guess::Ignored;
        }
        let Some(letter) = fold_letter(c) else {
            return Guess::Ignored;
        };
        if self.has_tried(letter) {
            return Guess::Ignored;
        }

        if self.entry.contains(letter) {
            self.guessed_letters.insert(letter);
            Guess::Hit
        } else {
            self.wrong_letters.insert(letter);
            self.attempts_left = self.attempts_left.saturating_sub(1);
            Guess::Miss
        }
    }

    /// Re-derives the budget from the word and `difficulty`, never going
    /// below zero. Returns the new value.
    pub(crate) fn recompute_attempts(&mut self, difficulty: Difficulty) -> u32 {
        let cap = attempts_for(self.entry.word(), difficulty);
        self.attempts_left = cap.saturating_sub(self.wrong_letters.len() as u32);
        self.attempts_left
    }

    pub(crate) fn finish(&mut self, outcome: Outcome) {
        if self.is_playing() {
            self.outcome = outcome;
        }
    }

    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started_at)
    }

    pub fn has_expired(&self, now: Instant, limit: Duration) -> bool {
        self.elapsed(now) >= limit
    }

    /// Whole seconds left on the clock, floored at zero
    pub fn remaining_secs(&self, now: Instant, limit: Duration) -> u64 {
        limit.as_secs().saturating_sub(self.elapsed(now).as_secs())
    }

    /// `_` for hidden letters, separated by single spaces
    pub fn masked_word(&self) -> String {
        self.entry
            .word()
            .chars()
            .map(|c| {
                if self.guessed_letters.contains(&c) {
                    c
                } else {
                    '_'
                }
            })
            .join(" ")
    }

    pub fn wrong_letters_sorted(&self) -> Vec<char> {
        self.wrong_letters.iter().copied().collect()
    }
}
