//! Error types for wonderfield

use std::path::PathBuf;

use thiserror::Error;

/// Startup and configuration failures. Gameplay itself never fails: bad
/// guesses are ignored and cue playback is best-effort.
#[derive(Debug, Error)]
pub enum GameError {
    /// The catalog has no entries, so no round can ever start
    #[error("word bank is empty")]
    EmptyWordBank,

    /// A catalog entry is unusable
    #[error("invalid word bank entry {word:?}: {reason}")]
    InvalidEntry { word: String, reason: &'static str },

    /// Embedded catalog missing from the binary
    #[error("embedded word bank {0} not found")]
    MissingCatalog(String),

    /// Reading a file given on the command line failed
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Word bank or config JSON did not parse
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The log file subscriber could not be installed
    #[error("logging setup failed: {0}")]
    Logging(String),
}

/// Result type for wonderfield operations
pub type Result<T> = std::result::Result<T, GameError>;
