//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from an optional TOML file and environment variables.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use url::Url;

use crate::utils::errors::{BotError, Result};
use crate::utils::helpers::{non_blank, normalize_webhook_path};

/// Port used when `PORT` is not set
pub const DEFAULT_PORT: u16 = 8000;

/// Log level used when `LOG_LEVEL` is not set
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Main application configuration structure
///
/// Built once at startup and handed to the dispatcher as a dependency;
/// handlers never read the environment themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub bot: BotConfig,
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

/// Telegram bot configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotConfig {
    pub token: String,
    /// Chat that receives login notifications; `None` disables them
    pub log_chat_id: Option<i64>,
    /// Operator's own user id, never reported to the logging chat
    pub owner_id: i64,
    /// Public callback URL; presence selects webhook mode
    pub webhook_url: Option<String>,
}

/// HTTP listener configuration (webhook mode only)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub level: String,
    pub directory: Option<String>,
}

/// How updates reach the bot. Chosen once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunMode {
    /// Long-polling `getUpdates`
    Polling,
    /// Telegram pushes updates to a registered public URL
    Webhook { url: String },
}

/// Flat view of the environment, e.g. `BOT_TOKEN` -> `bot_token`
#[derive(Debug, Default, Deserialize)]
struct RawSettings {
    bot_token: Option<String>,
    log_chat_id: Option<i64>,
    owner_id: Option<i64>,
    webhook_url: Option<String>,
    port: Option<u16>,
    log_level: Option<String>,
    log_dir: Option<String>,
}

impl From<RawSettings> for Settings {
    fn from(raw: RawSettings) -> Self {
        let webhook_url = non_blank(raw.webhook_url)
            .map(|url| url.trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty());

        Self {
            bot: BotConfig {
                token: non_blank(raw.bot_token).unwrap_or_default(),
                log_chat_id: raw.log_chat_id.filter(|id| *id != 0),
                owner_id: raw.owner_id.unwrap_or(0),
                webhook_url,
            },
            server: ServerConfig {
                port: raw.port.unwrap_or(DEFAULT_PORT),
            },
            logging: LoggingConfig {
                level: non_blank(raw.log_level).unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
                directory: non_blank(raw.log_dir),
            },
        }
    }
}

impl Settings {
    /// Load settings from `config.toml` (if present) and the process environment
    pub fn new() -> Result<Self> {
        Self::load(
            Some(config::File::with_name("config").required(false)),
            config::Environment::default(),
        )
    }

    /// Load settings from an explicit set of environment variables
    pub fn from_env_map(vars: HashMap<String, String>) -> Result<Self> {
        Self::load(None, Self::environment(vars))
    }

    /// Load settings from a TOML file overlaid with explicit environment variables
    pub fn from_file(path: &Path, vars: HashMap<String, String>) -> Result<Self> {
        Self::load(Some(config::File::from(path)), Self::environment(vars))
    }

    fn environment(vars: HashMap<String, String>) -> config::Environment {
        config::Environment::default().source(Some(vars.into_iter().collect()))
    }

    fn load(
        file: Option<config::File<config::FileSourceFile, config::FileFormat>>,
        environment: config::Environment,
    ) -> Result<Self> {
        let mut builder = config::Config::builder();
        if let Some(file) = file {
            builder = builder.add_source(file);
        }

        let raw: RawSettings = builder
            .add_source(environment.ignore_empty(true))
            .build()?
            .try_deserialize()?;

        Ok(raw.into())
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<()> {
        super::validation::validate_settings(self)
    }

    /// Select how updates are received
    pub fn run_mode(&self) -> RunMode {
        match &self.bot.webhook_url {
            Some(url) => RunMode::Webhook { url: url.clone() },
            None => RunMode::Polling,
        }
    }

    /// Whether login notifications are forwarded anywhere
    pub fn logging_enabled(&self) -> bool {
        self.bot.log_chat_id.is_some()
    }
}

impl BotConfig {
    /// URL registered with Telegram for webhook deliveries
    pub fn webhook_endpoint(&self) -> Result<Option<Url>> {
        let Some(raw) = self.webhook_url.as_deref() else {
            return Ok(None);
        };

        let mut url = Url::parse(raw)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(BotError::Config(format!(
                "WEBHOOK_URL must use http or https, got {}",
                url.scheme()
            )));
        }

        let path = normalize_webhook_path(url.path());
        url.set_path(&path);
        Ok(Some(url))
    }
}

impl Default for Settings {
    fn default() -> Self {
        RawSettings::default().into()
    }
}
