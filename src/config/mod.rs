mod types;

pub use types::*;

use crate::{Error, Result};
use std::env;
use std::path::Path;
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Loads the configuration file (if any) and applies environment overrides.
///
/// `CONFIG_PATH` must point at a readable file when set. Without it,
/// `config.yaml` is used when present and built-in defaults otherwise.
pub async fn load() -> Result<Config> {
    load_with(|key| env::var(key).ok()).await
}

/// Same as [`load`], reading `CONFIG_PATH` and the overrides from `lookup`.
pub async fn load_with<F>(lookup: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let config = match lookup("CONFIG_PATH") {
        Some(path) => load_file(&path).await?,
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => load_file(DEFAULT_CONFIG_PATH).await?,
        None => {
            debug!("No configuration file found, using defaults");
            Config::default()
        }
    };

    let config = apply_overrides(config, lookup)?;
    validate(&config)?;

    Ok(config)
}

pub async fn load_file(path: &str) -> Result<Config> {
    debug!("Loading configuration from: {}", path);

    let config_str = tokio::fs::read_to_string(path).await?;
    let config: Config = serde_yaml::from_str(&config_str)?;

    Ok(config)
}

/// Overlays credentials and bind settings taken from `lookup` (normally the
/// process environment) onto `config`.
pub fn apply_overrides<F>(mut config: Config, lookup: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(key) = lookup("OPENAI_API_KEY") {
        config.llm.api_key = Some(key);
    }
    if let Some(base_url) = lookup("OPENAI_BASE_URL") {
        config.llm.base_url = base_url;
    }
    if let Some(token) = lookup("TELEGRAM_BOT_TOKEN") {
        config.telegram.bot_token = Some(token);
    }
    if let Some(host) = lookup("HOST") {
        config.server.host = host;
    }
    if let Some(port) = lookup("PORT") {
        config.server.port = port
            .trim()
            .parse()
            .map_err(|_| Error::config(format!("Invalid PORT value: '{}'", port)))?;
    }
    if let Some(mode) = lookup("RELAY_MODE") {
        config.server.mode = match mode.trim().to_ascii_lowercase().as_str() {
            "twilio" => RelayMode::Twilio,
            "telegram" => RelayMode::Telegram,
            other => {
                return Err(Error::config(format!(
                    "Invalid RELAY_MODE value: '{}'. Valid modes: twilio, telegram",
                    other
                )));
            }
        };
    }

    Ok(config)
}

/// Rejects settings the router cannot be built from.
pub fn validate(config: &Config) -> Result<()> {
    validate_webhook_path(&config.server.webhook_path)
}

pub fn validate_webhook_path(path: &str) -> Result<()> {
    if !path.starts_with('/') {
        return Err(Error::config(format!(
            "Invalid webhook_path: '{}'. It must start with '/'",
            path
        )));
    }

    Ok(())
}
