//! Subcommand implementations.

/// Configure command handler.
pub mod configure;

/// Interactive session command handler.
pub mod interactive;

/// Translation command handler.
pub mod translate;
