use anyhow::Result;

use crate::config::{ConfigManager, ResolveOptions, resolve_config};
use crate::session::{SessionConfig, TranslatorSession};
use crate::translation::Language;

pub struct InteractiveOptions {
    pub to: Option<Language>,
    pub endpoint: Option<String>,
    pub model: Option<String>,
}

pub async fn run_interactive(options: InteractiveOptions) -> Result<()> {
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

    let config = SessionConfig {
        endpoint: resolved.endpoint,
        model: resolved.model,
        api_key: resolved.api_key,
        to: resolved.to,
    };

    let mut session = TranslatorSession::new(config);
    session.run().await
}
