use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::paths;

/// Settings for the question answering service, the `[qna]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QnaSettings {
    /// The knowledge base query endpoint URL.
    pub endpoint: Option<String>,
    /// API key stored directly in config (not recommended).
    #[serde(default)]
    pub api_key: Option<String>,
    /// Environment variable name containing the API key.
    #[serde(default)]
    pub api_key_env: Option<String>,
}

impl QnaSettings {
    /// Gets the API key, preferring environment variable over config file.
    pub fn get_api_key(&self) -> Option<String> {
        key_from_env_or_file(self.api_key_env.as_deref(), self.api_key.as_deref())
    }
}

/// Settings for the translation service, the `[translator]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TranslatorSettings {
    /// The translate endpoint URL, including the api-version query parameter.
    pub endpoint: Option<String>,
    /// API key stored directly in config (not recommended).
    #[serde(default)]
    pub api_key: Option<String>,
    /// Environment variable name containing the API key.
    #[serde(default)]
    pub api_key_env: Option<String>,
    /// The resource region sent alongside the key.
    pub region: Option<String>,
}

impl TranslatorSettings {
    /// Gets the API key, preferring environment variable over config file.
    pub fn get_api_key(&self) -> Option<String> {
        key_from_env_or_file(self.api_key_env.as_deref(), self.api_key.as_deref())
    }
}

fn key_from_env_or_file(env_name: Option<&str>, file_key: Option<&str>) -> Option<String> {
    if let Some(env_var) = env_name
        && let Ok(key) = std::env::var(env_var)
        && !key.is_empty()
    {
        return Some(key);
    }
    file_key.map(ToString::to_string)
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/qna/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Question answering service settings.
    #[serde(default)]
    pub qna: QnaSettings,
    /// Translation service settings.
    #[serde(default)]
    pub translator: TranslatorSettings,
}

/// Resolved configuration for one session.
///
/// Built once at startup and handed to the clients by reference; nothing
/// else reads the config file after this point.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// The question answering endpoint URL.
    pub qna_endpoint: String,
    /// The question answering API key.
    pub qna_key: String,
    /// The translation endpoint URL.
    pub translator_endpoint: String,
    /// The translation API key.
    pub translator_key: String,
    /// The translation resource region.
    pub translator_region: String,
}

/// Resolves the config file into the values a session needs.
///
/// # Errors
///
/// Returns an error naming the missing key if any required value is absent.
pub fn resolve_config(config_file: &ConfigFile) -> Result<ResolvedConfig> {
    let qna_endpoint = config_file
        .qna
        .endpoint
        .clone()
        .ok_or_else(|| missing("qna.endpoint"))?;

    let qna_key = config_file.qna.get_api_key().ok_or_else(|| {
        missing_key("qna", config_file.qna.api_key_env.as_deref())
    })?;

    let translator_endpoint = config_file
        .translator
        .endpoint
        .clone()
        .ok_or_else(|| missing("translator.endpoint"))?;

    let translator_key = config_file.translator.get_api_key().ok_or_else(|| {
        missing_key("translator", config_file.translator.api_key_env.as_deref())
    })?;

    let translator_region = config_file
        .translator
        .region
        .clone()
        .ok_or_else(|| missing("translator.region"))?;

    Ok(ResolvedConfig {
        qna_endpoint,
        qna_key,
        translator_endpoint,
        translator_key,
        translator_region,
    })
}

fn missing(key: &str) -> anyhow::Error {
    anyhow::anyhow!(
        "Missing required configuration: '{key}'\n\n\
         Run 'qna configure' to set up configuration,\n\
         or edit ~/.config/qna/config.toml directly."
    )
}

fn missing_key(section: &str, env_name: Option<&str>) -> anyhow::Error {
    env_name.map_or_else(
        || missing(&format!("{section}.api_key")),
        |env_var| {
            anyhow::anyhow!(
                "Missing API key for '{section}'\n\n\
                 Set the {env_var} environment variable:\n  \
                 export {env_var}=\"your-api-key\"\n\n\
                 Or set api_key in ~/.config/qna/config.toml"
            )
        },
    )
}

/// Manages loading and saving the configuration file.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/qna/config.toml`
    /// or `~/.config/qna/config.toml` if `XDG_CONFIG_HOME` is not set.
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

        fs::write(&self.config_path, contents).with_context(|| {
            format!(
                "Failed to write config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(())
    }

    pub fn load_or_default(&self) -> ConfigFile {
        self.load().unwrap_or_default()
    }
}
