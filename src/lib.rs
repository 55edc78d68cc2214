//! # anuvad - English/Nepali Translation CLI
//!
//! `anuvad` translates text between English and Nepali using OpenAI-compatible
//! chat completion endpoints. Each translation is a single request/response
//! exchange: build a prompt, POST it with a bearer key, print the completion.
//!
//! ## Quick Start
//!
//! ```bash
//! # Translate a file (direction is detected from the text)
//! anuvad ./letter.txt
//!
//! # Translate from stdin into Nepali
//! echo "Good morning" | anuvad --to ne
//!
//! # Interactive session
//! anuvad interactive
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/anuvad/config.toml`:
//!
//! ```toml
//! [anuvad]
//! to = "ne"
//! model = "llama-3.3-70b-versatile"
//!
//! [api]
//! endpoint = "https://api.groq.com/openai"
//! api_key_env = "GROQ_API_KEY"
//! ```
//!
//! Omit `to` to detect the direction from each input: Devanagari text is
//! translated to English, everything else to Nepali.

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management and defaults.
pub mod config;

/// File system utilities.
pub mod fs;

/// Input reading from files and stdin.
pub mod input;

/// Global output configuration (quiet mode, colors, stderr/stdout routing).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Interactive translation sessions.
pub mod session;

/// Prompt construction and the translation client.
pub mod translation;

/// Terminal UI components (spinner, colors).
pub mod ui;
