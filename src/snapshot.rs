use std::time::Instant;

use crate::{difficulty::Difficulty, round::Outcome, session::GameSession};

/// Read-only view of the game handed to the renderer every frame
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub question: String,
    pub masked_word: String,
    pub wrong_letters: Vec<char>,
    pub attempts_left: u32,
    pub difficulty: Difficulty,
    pub total_score: u32,
    pub guessed_words: Vec<String>,
    pub remaining_secs: u64,
    pub outcome: Outcome,
    pub message: Option<String>,
}

impl Snapshot {
    pub fn capture(session: &GameSession, now: Instant) -> Self {
        let round = session.round();
        Self {
            question: round.question().to_string(),
            masked_word: round.masked_word(),
            wrong_letters: round.wrong_letters_sorted(),
            attempts_left: round.attempts_left(),
            difficulty: session.difficulty(),
            total_score: session.total_score(),
            guessed_words: session.guessed_words().to_vec(),
            remaining_secs: round.remaining_secs(now, session.round_time_limit()),
            outcome: round.outcome(),
            message: end_message(round.outcome(), round.word()),
        }
    }

    pub fn difficulty_label(&self) -> String {
        self.difficulty.to_string()
    }

    pub fn wrong_letters_text(&self) -> String {
        if self.wrong_letters.is_empty() {
            "No wrong letters yet".to_string()
        } else {
            let letters: Vec<String> = self.wrong_letters.iter().map(char::to_string).collect();
            format!("Wrong letters: {}", letters.join(" "))
        }
    }
}

fn end_message(outcome: Outcome, word: &str) -> Option<String> {
    match outcome {
        Outcome::Playing => None,
        Outcome::Won => Some("Victory! You guessed the word!".to_string()),
        Outcome::Lost => Some(format!("Out of attempts. The word was: {word}")),
        Outcome::TimedOut => Some(format!("Time is up! The word was: {word}")),
    }
}
