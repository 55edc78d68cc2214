//! Consistent styling utilities for CLI output.
//!
//! Color and formatting helpers using owo-colors. All helpers degrade to
//! plain text when colors are disabled.

use owo_colors::OwoColorize;
use std::fmt::Display;

use crate::output;

/// Styles for different semantic elements.
pub struct Style;

impl Style {
    fn paint<T: Display>(text: T, colorize: impl FnOnce(&str) -> String) -> String {
        let plain = text.to_string();
        if output::is_no_color() {
            plain
        } else {
            colorize(&plain)
        }
    }

    /// Style for section headers (e.g., "Configuration", "Available commands")
    pub fn header<T: Display>(text: T) -> String {
        Self::paint(text, |s| s.bold().to_string())
    }

    /// Style for labels/keys (e.g., "model", "endpoint")
    pub fn label<T: Display>(text: T) -> String {
        Self::paint(text, |s| s.dimmed().to_string())
    }

    /// Style for primary values (e.g., model names, language names)
    pub fn value<T: Display>(text: T) -> String {
        Self::paint(text, |s| s.cyan().to_string())
    }

    /// Style for secondary/supplementary info (e.g., endpoints, descriptions)
    pub fn secondary<T: Display>(text: T) -> String {
        Self::paint(text, |s| s.dimmed().to_string())
    }

    /// Style for success messages
    pub fn success<T: Display>(text: T) -> String {
        Self::paint(text, |s| s.green().to_string())
    }

    /// Style for error messages
    pub fn error<T: Display>(text: T) -> String {
        Self::paint(text, |s| s.red().bold().to_string())
    }

    /// Style for warning messages
    pub fn warning<T: Display>(text: T) -> String {
        Self::paint(text, |s| s.yellow().to_string())
    }

    /// Style for commands (e.g., "/config", "/help")
    pub fn command<T: Display>(text: T) -> String {
        Self::paint(text, |s| s.green().to_string())
    }

    /// Style for version info
    pub fn version<T: Display>(text: T) -> String {
        Self::paint(text, |s| s.dimmed().to_string())
    }
}
