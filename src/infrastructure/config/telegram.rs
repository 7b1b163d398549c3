//! Telegram bot configuration.

use std::fmt;

use serde::Deserialize;

use crate::domain::AuthorizedCallers;

const fn default_true() -> bool {
    true
}

/// Telegram settings that may come from the config file.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct TelegramFileConfig {
    #[serde(default = "default_true")]
    pub register_commands: bool,
}

impl Default for TelegramFileConfig {
    fn default() -> Self {
        Self {
            register_commands: default_true(),
        }
    }
}

/// Telegram bot configuration.
///
/// The token and the authorized callers only ever come from the
/// environment, never from the config file.
#[derive(Clone)]
pub struct TelegramConfig {
    /// Bot API token obtained from BotFather.
    pub bot_token: String,
    /// Users allowed to issue commands.
    pub authorized_callers: AuthorizedCallers,
    /// Publish the command list to Telegram's "/" menu at startup.
    pub register_commands: bool,
}

impl fmt::Debug for TelegramConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelegramConfig")
            .field("bot_token", &"<redacted>")
            .field("authorized_callers", &self.authorized_callers)
            .field("register_commands", &self.register_commands)
            .finish()
    }
}
