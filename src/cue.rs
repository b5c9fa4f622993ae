use std::io::{self, Write};

/// Symbolic sound events emitted by the engine, at most one per event
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum Cue {
    CorrectLetter,
    WrongLetter,
    Victory,
    Defeat,
}

/// Something that can make a cue audible. Playback is fire-and-forget:
/// implementations swallow their own failures.
pub trait CuePlayer {
    fn play(&mut self, cue: Cue);
}

/// Plays nothing; used for `--mute`
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl CuePlayer for Silent {
    fn play(&mut self, _cue: Cue) {}
}

/// Rings the terminal bell: once for a wrong letter, twice for a defeat.
/// Correct letters and victories have no bell pattern and stay quiet.
pub struct TerminalBell<W: Write = io::Stdout> {
    out: W,
}

impl TerminalBell {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> TerminalBell<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    fn pattern(cue: Cue) -> &'static [u8] {
        match cue {
            Cue::CorrectLetter | Cue::Victory => b"",
            Cue::WrongLetter => b"\x07",
            Cue::Defeat => b"\x07\x07",
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> CuePlayer for TerminalBell<W> {
    fn play(&mut self, cue: Cue) {
        let pattern = Self::pattern(cue);
        if pattern.is_empty() {
            return;
        }
        if let Err(err) = self.out.write_all(pattern).and_then(|_| self.out.flush()) {
            tracing::debug!(%cue, %err, "cue playback failed");
        }
    }
}

/// Keeps every cue it is handed; handy for headless runs and tests
#[derive(Debug, Default, Clone)]
pub struct Recorder {
    pub played: Vec<Cue>,
}

impl CuePlayer for Recorder {
    fn play(&mut self, cue: Cue) {
        self.played.push(cue);
    }
}

impl<P: CuePlayer + ?Sized> CuePlayer for Box<P> {
    fn play(&mut self, cue: Cue) {
        (**self).play(cue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "gone"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_bell_patterns() {
        let mut bell = TerminalBell::new(Vec::new());
        bell.play(Cue::CorrectLetter);
        bell.play(Cue::WrongLetter);
        bell.play(Cue::Victory);
        bell.play(Cue::Defeat);
        assert_eq!(bell.into_inner(), b"\x07\x07\x07".to_vec());
    }

    #[test]
    fn test_bell_swallows_write_errors() {
        let mut bell = TerminalBell::new(BrokenPipe);
        bell.play(Cue::Defeat);
        bell.play(Cue::WrongLetter);
    }

    #[test]
    fn test_recorder_and_boxed_player() {
        let mut boxed: Box<Recorder> = Box::default();
        boxed.play(Cue::Victory);
        boxed.play(Cue::WrongLetter);
        assert_eq!(boxed.played, vec![Cue::Victory, Cue::WrongLetter]);

        let mut silent: Box<dyn CuePlayer> = Box::new(Silent);
        silent.play(Cue::Defeat);
    }

    #[test]
    fn test_cue_display() {
        assert_eq!(Cue::CorrectLetter.to_string(), "CorrectLetter");
        assert_eq!(Cue::Defeat.to_string(), "Defeat");
    }
}
