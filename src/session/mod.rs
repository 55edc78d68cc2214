//! Interactive translation sessions.
//!
//! Provides a REPL-style interface with slash commands for direction and
//! model control.

/// Slash command parsing and autocomplete.
pub mod command;
mod repl;
mod ui;

pub use repl::{SessionConfig, TranslatorSession};
