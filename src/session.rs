use std::time::{Duration, Instant};

use rand::Rng;

use crate::{
    cue::Cue,
    difficulty::{points_for, Difficulty},
    round::{Guess, Outcome, RoundState},
    word_bank::WordBank,
};

pub const DEFAULT_ROUND_SECS: u64 = 60;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionConfig {
    pub difficulty: Difficulty,
    pub round_time_limit: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            round_time_limit: Duration::from_secs(DEFAULT_ROUND_SECS),
        }
    }
}

/// Everything that outlives a single round: difficulty, score, history and
/// the round currently being played.
#[derive(Debug, Clone)]
pub struct GameSession {
    difficulty: Difficulty,
    total_score: u32,
    guessed_words: Vec<String>,
    round_time_limit: Duration,
    round: RoundState,
}

impl GameSession {
    /// Creates the session and deals its first round
    pub fn new<R: Rng + ?Sized>(
        config: SessionConfig,
        bank: &WordBank,
        rng: &mut R,
        now: Instant,
    ) -> Self {
        let round = RoundState::new(bank.choose(rng).clone(), config.difficulty, now);
        let session = Self {
            difficulty: config.difficulty,
            total_score: 0,
            guessed_words: Vec::new(),
            round_time_limit: config.round_time_limit,
            round,
        };
        session.log_round_start();
        session
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn total_score(&self) -> u32 {
        self.total_score
    }

    pub fn guessed_words(&self) -> &[String] {
        &self.guessed_words
    }

    pub fn round_time_limit(&self) -> Duration {
        self.round_time_limit
    }

    pub fn round(&self) -> &RoundState {
        &self.round
    }

    /// Discards the current round, whatever its state, and deals a new one
    pub fn start_round<R: Rng + ?Sized>(&mut self, bank: &WordBank, rng: &mut R, now: Instant) {
        self.round = RoundState::new(bank.choose(rng).clone(), self.difficulty, now);
        self.log_round_start();
    }

    fn log_round_start(&self) {
        tracing::info!(
            letters = self.round.entry().len(),
            difficulty = %self.difficulty,
            attempts = self.round.attempts_left(),
            "round started"
        );
        tracing::debug!(word = self.round.word(), "hidden word");
    }

    pub fn guess_letter(&mut self, c: char) -> Option<Cue> {
        match self.round.record(c) {
            Guess::Ignored => None,
            Guess::Hit => {
                tracing::debug!(letter = %c, "correct letter");
                if self.round.is_solved() {
                    self.win();
                    Some(Cue::Victory)
                } else {
                    Some(Cue::CorrectLetter)
                }
            }
            Guess::Miss => {
                tracing::debug!(
                    letter = %c,
                    attempts_left = self.round.attempts_left(),
                    "wrong letter"
                );
                if self.round.attempts_left() == 0 {
                    self.finish(Outcome::Lost);
                    Some(Cue::Defeat)
                } else {
                    Some(Cue::WrongLetter)
                }
            }
        }
    }

    fn win(&mut self) {
        let points = points_for(self.round.word(), self.difficulty);
        self.total_score += points;
        self.guessed_words.push(self.round.word().to_string());
        self.finish(Outcome::Won);
        tracing::info!(points, total_score = self.total_score, "word guessed");
    }

    fn finish(&mut self, outcome: Outcome) {
        self.round.finish(outcome);
        if outcome != Outcome::Won {
            tracing::info!(%outcome, word = self.round.word(), "round over");
        }
    }

    /// Times the round out once the limit has passed. No effect on a round
    /// that is already over.
    pub fn tick(&mut self, now: Instant) -> Option<Cue> {
        if self.round.is_playing() && self.round.has_expired(now, self.round_time_limit) {
            self.finish(Outcome::TimedOut);
            return Some(Cue::Defeat);
        }
        None
    }

    /// Moves to the next difficulty. A live round gets its budget
    /// re-derived, which can end it when the mistakes already made exceed
    /// the tighter cap.
    pub fn change_difficulty(&mut self) -> Option<Cue> {
        self.difficulty = self.difficulty.next();
        tracing::info!(difficulty = %self.difficulty, "difficulty changed");

        if !self.round.is_playing() {
            return None;
        }
        if self.round.recompute_attempts(self.difficulty) == 0 {
            self.finish(Outcome::Lost);
            return Some(Cue::Defeat);
        }
        None
    }
}
