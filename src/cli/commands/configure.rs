//! Configure command handler for editing default settings.

use anyhow::{Result, bail};
use inquire::{Select, Text};

use crate::config::{
    ConfigFile, ConfigManager, DEFAULT_API_KEY_ENV, DEFAULT_ENDPOINT, DEFAULT_MODEL,
};
use crate::translation::Language;
use crate::ui::{Style, handle_prompt_cancellation};

/// Runs the configure command to edit default settings.
///
/// Interactively sets the default direction, model, endpoint, and API key
/// environment variable.
pub fn run_configure() -> Result<()> {
    handle_prompt_cancellation(run_configure_inner)
}

fn run_configure_inner() -> Result<()> {
    let manager = ConfigManager::new()?;
    let mut config = manager.load_or_default();

    print_current_defaults(&config);

    let to = select_direction(config.anuvad.to)?;
    let model = prompt_text("Default model:", config.anuvad.model.as_deref(), DEFAULT_MODEL)?;
    let endpoint = prompt_text(
        "API endpoint:",
        config.api.endpoint.as_deref(),
        DEFAULT_ENDPOINT,
    )?;
    let api_key_env = prompt_text(
        "API key environment variable:",
        config.api.api_key_env.as_deref(),
        DEFAULT_API_KEY_ENV,
    )?;

    config.anuvad.to = to;
    config.anuvad.model = Some(model);
    config.api.endpoint = Some(endpoint);
    config.api.api_key_env = Some(api_key_env);

    manager.save(&config)?;

    println!();
    println!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display().to_string())
    );

    Ok(())
}

fn print_current_defaults(config: &ConfigFile) {
    println!("{}", Style::header("Current defaults"));
    println!(
        "  {}           {}",
        Style::label("to"),
        config
            .anuvad
            .to
            .map_or_else(|| Style::secondary("(detected per input)"), Style::value)
    );
    println!(
        "  {}        {}",
        Style::label("model"),
        config
            .anuvad
            .model
            .as_deref()
            .map_or_else(|| Style::secondary("(not set)"), Style::value)
    );
    println!(
        "  {}     {}",
        Style::label("endpoint"),
        config
            .api
            .endpoint
            .as_deref()
            .map_or_else(|| Style::secondary("(not set)"), Style::value)
    );
    println!(
        "  {}  {}",
        Style::label("api_key_env"),
        config
            .api
            .api_key_env
            .as_deref()
            .map_or_else(|| Style::secondary("(not set)"), Style::value)
    );
    println!();
}

fn select_direction(current: Option<Language>) -> Result<Option<Language>> {
    let options = vec![
        "auto - Detect the direction from each input".to_string(),
        "en - Always translate into English".to_string(),
        "ne - Always translate into Nepali".to_string(),
    ];

    let default_index = match current {
        None => 0,
        Some(Language::English) => 1,
        Some(Language::Nepali) => 2,
    };

    let selection = Select::new("Default direction:", options)
        .with_starting_cursor(default_index)
        .prompt()?;

    // Extract code from "code - description" format
    let code = selection.split(" - ").next().unwrap_or(&selection);

    if code == "auto" {
        Ok(None)
    } else {
        Ok(Some(code.parse()?))
    }
}

fn prompt_text(message: &str, current: Option<&str>, fallback: &str) -> Result<String> {
    let default = current.unwrap_or(fallback);

    let value = Text::new(message).with_default(default).prompt()?;

    if value.trim().is_empty() {
        bail!("Value cannot be empty");
    }

    Ok(value.trim().to_string())
}
