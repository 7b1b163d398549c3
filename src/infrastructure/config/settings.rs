//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application
//! settings. Non-secret settings come from an optional TOML file; the bot
//! token and the authorized user ids come only from the environment:
//!
//! - `BOT_TOKEN` - Telegram bot token (required)
//! - `AUTHORIZED_USER_IDS` - comma-separated numeric user ids (required)
//!
//! # Example
//!
//! ```no_run
//! use basoka::infrastructure::config::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load(Some("basoka.toml".as_ref()))?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::agent::AgentConfig;
use super::logging::LoggingConfig;
use super::registry::RegistryConfig;
use super::telegram::{TelegramConfig, TelegramFileConfig};
use crate::domain::AuthorizedCallers;
use crate::error::{ConfigError, Result};

/// Environment variable holding the Telegram bot token.
pub const BOT_TOKEN_ENV: &str = "BOT_TOKEN";

/// Environment variable holding the comma-separated authorized user ids.
pub const AUTHORIZED_USERS_ENV: &str = "AUTHORIZED_USER_IDS";

/// Shape of the TOML file.
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    #[serde(default)]
    logging: LoggingConfig,
    #[serde(default)]
    registry: RegistryConfig,
    #[serde(default)]
    agent: AgentConfig,
    #[serde(default)]
    telegram: TelegramFileConfig,
}

/// Main application configuration.
///
/// Built once at startup and shared by reference; nothing reads the
/// environment after [`Config::load`] returns.
#[derive(Debug, Clone)]
pub struct Config {
    /// Logging and tracing configuration.
    pub logging: LoggingConfig,
    /// Registry file location.
    pub registry: RegistryConfig,
    /// Server agent endpoints and timeout.
    pub agent: AgentConfig,
    /// Bot token, authorized callers and menu registration.
    pub telegram: TelegramConfig,
}

impl Config {
    /// Load configuration from an optional TOML file and the process
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, a required
    /// environment variable is missing, or any value fails validation.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let content = path
            .map(fs::read_to_string)
            .transpose()
            .map_err(ConfigError::ReadFile)?;

        Self::from_sources(content.as_deref(), |key| std::env::var(key).ok())
    }

    /// Build configuration from TOML text and an environment lookup.
    ///
    /// # Errors
    ///
    /// Same as [`Config::load`], minus file access.
    pub fn from_sources(toml: Option<&str>, env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let file: FileConfig = match toml {
            Some(content) => toml::from_str(content).map_err(ConfigError::Parse)?,
            None => FileConfig::default(),
        };

        let bot_token = env(BOT_TOKEN_ENV)
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty())
            .ok_or(ConfigError::MissingField {
                field: BOT_TOKEN_ENV,
            })?;

        let raw_callers = env(AUTHORIZED_USERS_ENV).ok_or(ConfigError::MissingField {
            field: AUTHORIZED_USERS_ENV,
        })?;
        let authorized_callers = AuthorizedCallers::parse(&raw_callers)?;

        let config = Self {
            logging: file.logging,
            registry: file.registry,
            agent: file.agent,
            telegram: TelegramConfig {
                bot_token,
                authorized_callers,
                register_commands: file.telegram.register_commands,
            },
        };
        config.validate()?;

        Ok(config)
    }

    /// Read only the `[registry]` section of a config file.
    ///
    /// Needs no environment, so offline commands can locate the registry
    /// without the bot token.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_registry(path: Option<&Path>) -> Result<RegistryConfig> {
        let Some(path) = path else {
            return Ok(RegistryConfig::default());
        };
        let content = fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let file: FileConfig = toml::from_str(&content).map_err(ConfigError::Parse)?;
        Ok(file.registry)
    }

    fn validate(&self) -> Result<()> {
        if self.registry.path.as_os_str().is_empty() {
            return Err(ConfigError::MissingField {
                field: "registry.path",
            }
            .into());
        }
        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(ConfigError::InvalidValue {
                field: "logging.format",
                reason: format!("`{}` is not one of: pretty, json", self.logging.format),
            }
            .into());
        }
        self.agent.validate()?;
        Ok(())
    }

    /// Initialize logging based on configuration.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
