use anyhow::Result;

use crate::config::{ConfigManager, ResolveOptions, resolve_config};
use crate::input::InputReader;
use crate::status;
use crate::translation::{Direction, Language, TranslationClient, TranslationRequest};
use crate::ui::{Spinner, Style};

pub struct TranslateOptions {
    pub file: Option<String>,
    pub to: Option<Language>,
    pub endpoint: Option<String>,
    pub model: Option<String>,
}

pub async fn run_translate(options: TranslateOptions) -> Result<()> {
    let manager = ConfigManager::new()?;
    let config_file = manager.load_or_default();

    let resolved = resolve_config(
        &ResolveOptions {
            to: options.to,
            endpoint: options.endpoint,
            model: options.model,
        },
        &config_file,
    )?;

    let source_text = InputReader::read(options.file.as_deref())?;

    let detected = resolved.to.is_none();
    let direction = resolved
        .to
        .map_or_else(|| Direction::detect(&source_text), Direction::to);

    // Rejects empty input before anything touches the network
    let request = TranslationRequest::new(source_text, direction, resolved.model)?;

    if detected {
        status!("{}", Style::secondary(format!("[{direction}]")));
    }

    let client = TranslationClient::new(resolved.endpoint, resolved.api_key);

    let spinner = Spinner::new("Translating...");
    let result = client.translate(&request).await;
    spinner.stop();
    let result = result?;

    println!("{}", result.translated_text);

    if let Some(tokens) = result.tokens_used {
        status!("{}", Style::secondary(format!("({tokens} tokens)")));
    }

    Ok(())
}
