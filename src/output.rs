//! Global output configuration and utilities.
//!
//! Centralized control over CLI output behavior: quiet mode, color support,
//! and stderr/stdout routing.
//!
//! ## Design Principles
//!
//! - Translated text goes to stdout (for piping)
//! - Status messages, progress, and warnings go to stderr
//! - Quiet mode suppresses non-essential output
//! - Colors can be disabled via the NO_COLOR environment variable

use std::sync::OnceLock;

/// Global output configuration.
static OUTPUT_CONFIG: OnceLock<OutputConfig> = OnceLock::new();

/// Output configuration settings.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Suppress non-essential output.
    pub quiet: bool,
    /// Disable colored output.
    pub no_color: bool,
}

impl OutputConfig {
    /// Builds the configuration from CLI flags and the environment.
    pub fn from_flags(quiet: bool) -> Self {
        Self {
            quiet,
            // https://no-color.org/
            no_color: std::env::var("NO_COLOR").is_ok_and(|v| !v.is_empty()),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_flags(false)
    }
}

/// Initialize the global output configuration.
///
/// Should be called once at startup with the CLI flags. Subsequent calls are
/// ignored.
pub fn init(config: OutputConfig) {
    let _ = OUTPUT_CONFIG.set(config);
}

/// Get the current output configuration.
pub fn config() -> &'static OutputConfig {
    OUTPUT_CONFIG.get_or_init(OutputConfig::default)
}

/// Check if quiet mode is enabled.
pub fn is_quiet() -> bool {
    config().quiet
}

/// Check if colors are disabled.
pub fn is_no_color() -> bool {
    config().no_color
}

/// Print a status message to stderr (respects quiet mode).
///
/// Use this for progress notes and informational messages.
#[macro_export]
macro_rules! status {
    ($($arg:tt)*) => {
        if !$crate::output::is_quiet() {
            eprintln!($($arg)*);
        }
    };
}

/// Print a warning message to stderr (always shown, even in quiet mode).
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        eprintln!($($arg)*);
    };
}
