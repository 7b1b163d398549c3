//! Inbound adapters (driving side): the Telegram bot and the CLI.

pub mod cli;
pub mod telegram;
