use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing::Level;

use crate::error::{GameError, Result};

/// Sends `tracing` output to `path` (appending, no colors). The terminal is
/// owned by the UI, so without this call events are simply dropped.
pub fn init_file_logging(path: &Path, level: Level) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| GameError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|err| GameError::Logging(err.to_string()))
}
