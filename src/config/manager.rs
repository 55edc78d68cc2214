use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::translation::Language;
use crate::ui::Style;
use crate::{paths, warn};

/// Built-in defaults for the hosted endpoint this tool was built against.
pub const DEFAULT_ENDPOINT: &str = "https://api.groq.com/openai";
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";
pub const DEFAULT_API_KEY_ENV: &str = "GROQ_API_KEY";

/// Default settings in the `[anuvad]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnuvadConfig {
    /// Default target language. Omit to detect the direction from each input.
    pub to: Option<Language>,
    /// Default model name.
    pub model: Option<String>,
}

/// Settings in the `[api]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiConfig {
    /// The OpenAI-compatible API endpoint URL.
    #[serde(default)]
    pub endpoint: Option<String>,
    /// API key stored directly in config (not recommended).
    #[serde(default)]
    pub api_key: Option<String>,
    /// Environment variable name containing the API key.
    #[serde(default)]
    pub api_key_env: Option<String>,
}

impl ApiConfig {
    /// Gets the API key, preferring the environment variable over the config
    /// file value.
    pub fn resolve_api_key(&self) -> Option<String> {
        let env_var = self.api_key_env.as_deref().unwrap_or(DEFAULT_API_KEY_ENV);
        if let Ok(key) = std::env::var(env_var)
            && !key.is_empty()
        {
            return Some(key);
        }
        self.api_key.clone()
    }
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/anuvad/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Default settings.
    #[serde(default)]
    pub anuvad: AnuvadConfig,
    /// API endpoint settings.
    #[serde(default)]
    pub api: ApiConfig,
}

/// Resolved configuration after merging CLI arguments, the config file, and
/// built-in defaults.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// The API endpoint URL.
    pub endpoint: String,
    /// The model to use for translation.
    pub model: String,
    /// The API key.
    pub api_key: String,
    /// Fixed target language; `None` means detect per input.
    pub to: Option<Language>,
}

/// CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Target language override.
    pub to: Option<Language>,
    /// Endpoint URL override.
    pub endpoint: Option<String>,
    /// Model name override.
    pub model: Option<String>,
}

/// Resolves configuration by merging CLI options with config file settings.
///
/// CLI options take precedence over config file values, which take precedence
/// over the built-in defaults.
///
/// # Errors
///
/// Returns an error if no API key can be found.
pub fn resolve_config(
    options: &ResolveOptions,
    config_file: &ConfigFile,
) -> Result<ResolvedConfig> {
    let endpoint = options
        .endpoint
        .clone()
        .or_else(|| config_file.api.endpoint.clone())
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    let model = options
        .model
        .clone()
        .or_else(|| config_file.anuvad.model.clone())
        .unwrap_or_else(|| DEFAULT_MODEL.to_string());

    let to = options.to.or(config_file.anuvad.to);

    let api_key = config_file.api.resolve_api_key().ok_or_else(|| {
        let env_var = config_file
            .api
            .api_key_env
            .as_deref()
            .unwrap_or(DEFAULT_API_KEY_ENV);
        anyhow::anyhow!(
            "Missing API key\n\n\
             Set the {env_var} environment variable:\n  \
             export {env_var}=\"your-api-key\"\n\n\
             Or set api_key in ~/.config/anuvad/config.toml"
        )
    })?;

    Ok(ResolvedConfig {
        endpoint,
        model,
        api_key,
        to,
    })
}

/// Manages loading and saving configuration files.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/anuvad/config.toml`
    /// or `~/.config/anuvad/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile =
            toml::from_str(&contents).with_context(|| "Failed to parse config file")?;

        Ok(config_file)
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;

        crate::fs::atomic_write(&self.config_path, &contents).with_context(|| {
            format!(
                "Failed to write config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(())
    }

    /// Loads the config file, falling back to defaults.
    ///
    /// A missing file is the normal first-run case and stays silent; an
    /// unreadable file is reported on stderr before defaults take over.
    pub fn load_or_default(&self) -> ConfigFile {
        if !self.config_path.exists() {
            return ConfigFile::default();
        }
        match self.load() {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "{} ignoring config file ({e:#}); using defaults",
                    Style::warning("Warning:")
                );
                ConfigFile::default()
            }
        }
    }
}
