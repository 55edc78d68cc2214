//! XDG-style path utilities for the configuration directory.
//!
//! Prefers XDG Base Directory Specification conventions over OS-specific
//! locations.

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Returns the configuration directory for anuvad.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/anuvad` if `XDG_CONFIG_HOME` is set
/// 2. `~/.config/anuvad` otherwise
pub fn config_dir() -> Result<PathBuf> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME")
        && !xdg.is_empty()
    {
        return Ok(PathBuf::from(xdg).join("anuvad"));
    }
    Ok(home_dir()?.join(".config").join("anuvad"))
}

fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().context("Failed to determine home directory")
}
