use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::{
    difficulty::Difficulty,
    error::{GameError, Result},
    session::{SessionConfig, DEFAULT_ROUND_SECS},
    word_bank::WordBank,
};

/// Game settings. Built from defaults, then an optional JSON file, then
/// command-line flags. Never written back.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub difficulty: Difficulty,
    pub round_secs: u64,
    pub mute: bool,
    pub words: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            round_secs: DEFAULT_ROUND_SECS,
            mute: false,
            words: None,
        }
    }
}

impl Config {
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            difficulty: self.difficulty,
            round_time_limit: Duration::from_secs(self.round_secs.max(1)),
        }
    }

    /// The configured word bank, or the built-in one
    pub fn word_bank(&self) -> Result<WordBank> {
        match &self.words {
            Some(path) => WordBank::from_path(path),
            None => WordBank::builtin(),
        }
    }
}

pub trait ConfigSource {
    fn load(&self) -> Result<Config>;
}

#[derive(Debug, Clone)]
pub struct FileConfigSource {
    path: PathBuf,
}

impl FileConfigSource {
    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }
}

impl ConfigSource for FileConfigSource {
    fn load(&self) -> Result<Config> {
        let bytes = fs::read(&self.path).map_err(|source| GameError::Io {
            path: self.path.clone(),
            source,
        })?;
        Ok(serde_json::from_slice::<Config>(&bytes)?)
    }
}
