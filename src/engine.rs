use std::time::Instant;

use rand::{rngs::StdRng, SeedableRng};

use crate::{
    cue::{Cue, CuePlayer},
    input::Command,
    session::{GameSession, SessionConfig},
    snapshot::Snapshot,
    word_bank::WordBank,
};

/// Whether the event loop should keep going after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Single owner of all game state. Every command and tick is applied as
/// one step, and each step hands at most one cue to the player.
pub struct Engine<P: CuePlayer> {
    session: GameSession,
    bank: WordBank,
    rng: StdRng,
    player: P,
}

impl<P: CuePlayer> Engine<P> {
    pub fn new(config: SessionConfig, bank: WordBank, player: P, now: Instant) -> Self {
        Self::with_rng(config, bank, player, StdRng::from_entropy(), now)
    }

    /// Same word sequence for the same seed
    pub fn seeded(config: SessionConfig, bank: WordBank, player: P, seed: u64, now: Instant) -> Self {
        Self::with_rng(config, bank, player, StdRng::seed_from_u64(seed), now)
    }

    fn with_rng(
        config: SessionConfig,
        bank: WordBank,
        player: P,
        mut rng: StdRng,
        now: Instant,
    ) -> Self {
        let session = GameSession::new(config, &bank, &mut rng, now);
        Self {
            session,
            bank,
            rng,
            player,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn bank(&self) -> &WordBank {
        &self.bank
    }

    pub fn player(&self) -> &P {
        &self.player
    }

    pub fn snapshot(&self, now: Instant) -> Snapshot {
        Snapshot::capture(&self.session, now)
    }

    pub fn handle(&mut self, command: Command, now: Instant) -> Flow {
        if command == Command::Quit {
            return Flow::Quit;
        }

        // the clock is settled before any input touches the round
        let timed_out = self.session.tick(now);
        let cue = match command {
            Command::LetterTyped(c) => timed_out.or_else(|| self.session.guess_letter(c)),
            Command::CycleDifficulty => {
                let changed = self.session.change_difficulty();
                timed_out.or(changed)
            }
            Command::RequestNewRound => {
                self.session.start_round(&self.bank, &mut self.rng, now);
                timed_out
            }
            Command::Quit => None,
        };
        self.emit(cue);
        Flow::Continue
    }

    pub fn tick(&mut self, now: Instant) {
        let cue = self.session.tick(now);
        self.emit(cue);
    }

    fn emit(&mut self, cue: Option<Cue>) {
        if let Some(cue) = cue {
            self.player.play(cue);
        }
    }
}
