// Library surface for headless/integration tests and reuse.
// The binary in main.rs only owns the terminal and the CLI.
pub mod celebration;
pub mod config;
pub mod cue;
pub mod difficulty;
pub mod engine;
pub mod error;
pub mod input;
pub mod logging;
pub mod round;
pub mod runtime;
pub mod session;
pub mod snapshot;
pub mod ui;
pub mod word_bank;

pub use error::{GameError, Result};
