use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Discrete player intents consumed by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    LetterTyped(char),
    CycleDifficulty,
    RequestNewRound,
    Quit,
}

/// Maps a key press to a command. Key releases, navigation keys and
/// Ctrl/Alt chords other than Ctrl+C map to nothing.
pub fn command_for(key: KeyEvent) -> Option<Command> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Command::Quit),
        KeyCode::Esc => Some(Command::Quit),
        KeyCode::Tab => Some(Command::CycleDifficulty),
        KeyCode::Char(' ') | KeyCode::Enter => Some(Command::RequestNewRound),
        KeyCode::Char(_) if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            None
        }
        KeyCode::Char(c) => Some(Command::LetterTyped(c)),
        _ => None,
    }
}
