use include_dir::{include_dir, Dir};
use rand::Rng;
use serde::Deserialize;
use serde_json::from_str;
use std::{fs, path::Path};

use crate::error::{GameError, Result};

static WORDS_DIR: Dir = include_dir!("src/words");

pub const BUILTIN_CATALOG: &str = "computing";

/// A hidden word and the question hinting at it. Only built through
/// [`WordEntry::new`], so the word is always uppercase letters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordEntry {
    word: String,
    question: String,
}

impl WordEntry {
    /// Normalizes `word` to uppercase and rejects anything that is not a
    /// non-empty run of letters.
    pub fn new(word: &str, question: &str) -> Result<Self> {
        let word = word.trim().to_uppercase();
        if word.is_empty() {
            return Err(GameError::InvalidEntry {
                word,
                reason: "word is empty",
            });
        }
        if !word.chars().all(char::is_alphabetic) {
            return Err(GameError::InvalidEntry {
                word,
                reason: "word must contain letters only",
            });
        }
        Ok(Self {
            word,
            question: question.trim().to_string(),
        })
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn len(&self) -> usize {
        self.word.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    pub fn contains(&self, letter: char) -> bool {
        self.word.contains(letter)
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawEntry {
    word: String,
    question: String,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    #[serde(default = "default_name")]
    name: String,
    entries: Vec<RawEntry>,
}

fn default_name() -> String {
    "custom".to_string()
}

/// Read-only catalog the engine draws words from. Never empty.
#[derive(Clone, Debug)]
pub struct WordBank {
    pub name: String,
    entries: Vec<WordEntry>,
}

impl WordBank {
    pub fn new(name: impl Into<String>, entries: Vec<WordEntry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(GameError::EmptyWordBank);
        }
        Ok(Self {
            name: name.into(),
            entries,
        })
    }

    /// The catalog compiled into the binary
    pub fn builtin() -> Result<Self> {
        let file_name = format!("{BUILTIN_CATALOG}.json");
        let file = WORDS_DIR
            .get_file(&file_name)
            .ok_or_else(|| GameError::MissingCatalog(file_name.clone()))?;
        let contents = file
            .contents_utf8()
            .ok_or_else(|| GameError::MissingCatalog(file_name.clone()))?;
        Self::from_json(contents)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| GameError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&contents)
    }

    /// Parses `{"name": ..., "entries": [{"word": ..., "question": ...}]}`,
    /// normalizing and validating every entry.
    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: CatalogFile = from_str(json)?;
        let entries = catalog
            .entries
            .iter()
            .map(|e| WordEntry::new(&e.word, &e.question))
            .collect::<Result<Vec<_>>>()?;
        Self::new(catalog.name, entries)
    }

    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Uniform pick over all entries
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &WordEntry {
        &self.entries[rng.gen_range(0..self.entries.len())]
    }
}
