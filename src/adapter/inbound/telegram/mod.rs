//! Telegram command interface.
//!
//! Every inbound message passes the caller whitelist in [`auth`] before it
//! is parsed or dispatched to the server registry.

mod auth;
mod command;

pub mod bot;
pub mod control;

pub use auth::{command_response_for_message, guarded};
pub use command::{
    bot_commands, command_help, parse_command, CommandParseError, CommandSpec, ServerCommand,
    COMMANDS,
};
