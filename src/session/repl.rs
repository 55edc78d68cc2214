use anyhow::Result;
use inquire::Text;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};

use super::command::{Input, SlashCommand, SlashCommandCompleter, parse_input};
use super::ui;
use crate::translation::{
    Direction, Language, TranslationClient, TranslationRequest, TranslationResult,
};
use crate::ui::{Spinner, Style};

/// Configuration for an interactive translation session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// The API endpoint URL.
    pub endpoint: String,
    /// The model to use.
    pub model: String,
    /// The API key.
    pub api_key: String,
    /// Fixed target language; `None` detects the direction from each input.
    pub to: Option<Language>,
}

/// An interactive translation session.
///
/// Provides a REPL-style interface: type text, get the translation, adjust
/// the direction with slash commands. A failed translation is printed and
/// the loop keeps going.
pub struct TranslatorSession {
    config: SessionConfig,
    client: TranslationClient,
}

impl TranslatorSession {
    /// Creates a new session with the given configuration.
    pub fn new(config: SessionConfig) -> Self {
        let client = TranslationClient::new(config.endpoint.clone(), config.api_key.clone());
        Self { config, client }
    }

    pub async fn run(&mut self) -> Result<()> {
        ui::print_header();

        let prompt_style = Styled::new("❯")
            .with_fg(Color::LightBlue)
            .with_attr(Attributes::BOLD);
        let mut render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style);

        // Non-highlighted suggestions: gray
        render_config.option = StyleSheet::new().with_fg(Color::Grey);
        // Highlighted suggestion: purple
        render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkMagenta));

        loop {
            let input = Text::new("")
                .with_render_config(render_config)
                .with_autocomplete(SlashCommandCompleter)
                .with_help_message("Type text to translate, /help for commands, Ctrl+C to quit")
                .prompt();

            match input {
                Ok(line) => match parse_input(&line) {
                    Input::Empty => {}
                    Input::Command(cmd) => {
                        if !self.handle_command(cmd) {
                            break;
                        }
                    }
                    Input::Text(text) => {
                        // Errors are displayed, never fatal
                        if let Err(e) = self.translate_and_print(&text).await {
                            ui::print_error(&format!("{e:#}"));
                        }
                    }
                },
                Err(
                    inquire::InquireError::OperationCanceled
                    | inquire::InquireError::OperationInterrupted,
                ) => {
                    println!(); // Clear line before goodbye message
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }

        ui::print_goodbye();
        Ok(())
    }

    fn handle_command(&mut self, cmd: SlashCommand) -> bool {
        match cmd {
            SlashCommand::Config => {
                ui::print_config(&self.config);
                true
            }
            SlashCommand::Flip => {
                self.flip();
                true
            }
            SlashCommand::Help => {
                ui::print_help();
                true
            }
            SlashCommand::Quit => false,
            SlashCommand::Set { key, value } => {
                self.handle_set(&key, value.as_deref());
                true
            }
            SlashCommand::Unknown(cmd) => {
                ui::print_error(&format!("Unknown command: /{cmd}"));
                true
            }
        }
    }

    fn handle_set(&mut self, key: &str, value: Option<&str>) {
        match key {
            "to" => self.set_to(value),
            "model" => self.set_model(value),
            "" => {
                println!("Usage: /set <key> <value>");
                println!("Keys: to, model");
            }
            _ => {
                ui::print_error(&format!("Unknown setting: {key}"));
                println!("Available: to, model");
            }
        }
    }

    fn flip(&mut self) {
        match self.config.to {
            Some(target) => {
                let flipped = target.other();
                self.config.to = Some(flipped);
                println!(
                    "{} Now translating into {}\n",
                    Style::success("✓"),
                    Style::value(flipped)
                );
            }
            None => {
                ui::print_error(
                    "Direction is detected per input; fix it first with /set to <en|ne>",
                );
            }
        }
    }

    fn set_to(&mut self, value: Option<&str>) {
        match value {
            None => {
                ui::print_error("Usage: /set to <en|ne|auto>");
            }
            Some("auto") => {
                self.config.to = None;
                println!(
                    "{} Direction will be detected from each input\n",
                    Style::success("✓")
                );
            }
            Some(lang) => match lang.parse::<Language>() {
                Ok(language) => {
                    self.config.to = Some(language);
                    println!(
                        "{} Now translating into {}\n",
                        Style::success("✓"),
                        Style::value(language)
                    );
                }
                Err(e) => ui::print_error(&e.to_string()),
            },
        }
    }

    fn set_model(&mut self, value: Option<&str>) {
        match value {
            None => {
                ui::print_error("Usage: /set model <name>");
            }
            Some(model) => {
                self.config.model = model.to_string();
                println!(
                    "{} Model set to {}\n",
                    Style::success("✓"),
                    Style::value(model)
                );
            }
        }
    }

    async fn translate_and_print(&self, text: &str) -> Result<()> {
        let direction = self
            .config
            .to
            .map_or_else(|| Direction::detect(text), Direction::to);

        let request = TranslationRequest::new(text, direction, self.config.model.clone())?;

        let spinner = Spinner::new("Translating...");
        let result = self.client.translate(&request).await;
        spinner.stop();

        let TranslationResult {
            translated_text, ..
        } = result?;

        if self.config.to.is_none() {
            println!("{}", Style::secondary(format!("[{direction}]")));
        }
        println!("{translated_text}");
        println!();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> SessionConfig {
        SessionConfig {
            endpoint: "http://localhost:8080".to_string(),
            model: "test-model".to_string(),
            api_key: "test-key".to_string(),
            to: Some(Language::Nepali),
        }
    }

    #[test]
    fn test_flip_swaps_fixed_direction() {
        let mut session = TranslatorSession::new(test_config());
        session.flip();
        assert_eq!(session.config.to, Some(Language::English));
        session.flip();
        assert_eq!(session.config.to, Some(Language::Nepali));
    }

    #[test]
    fn test_flip_leaves_auto_mode_alone() {
        let mut config = test_config();
        config.to = None;
        let mut session = TranslatorSession::new(config);
        session.flip();
        assert_eq!(session.config.to, None);
    }

    #[test]
    fn test_set_to_auto_clears_fixed_direction() {
        let mut session = TranslatorSession::new(test_config());
        session.set_to(Some("auto"));
        assert_eq!(session.config.to, None);
    }

    #[test]
    fn test_set_to_language() {
        let mut session = TranslatorSession::new(test_config());
        session.set_to(Some("en"));
        assert_eq!(session.config.to, Some(Language::English));
    }

    #[test]
    fn test_set_to_rejects_unknown_language() {
        let mut session = TranslatorSession::new(test_config());
        session.set_to(Some("ja"));
        assert_eq!(session.config.to, Some(Language::Nepali));
    }

    #[test]
    fn test_set_model() {
        let mut session = TranslatorSession::new(test_config());
        session.set_model(Some("other-model"));
        assert_eq!(session.config.model, "other-model");
    }
}
