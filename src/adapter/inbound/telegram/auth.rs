//! Caller whitelist for Telegram command handling.

use std::future::Future;

use tracing::warn;

use super::command::{command_help, parse_command, CommandParseError};
use super::control::BotControl;
use crate::domain::{AuthorizedCallers, CallerId};

/// Run `handler` only if `caller` is on the whitelist.
///
/// Denied callers get no reply and the handler is never polled.
pub async fn guarded<F, Fut>(
    caller: Option<CallerId>,
    callers: &AuthorizedCallers,
    handler: F,
) -> Option<String>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Option<String>>,
{
    if !is_authorized_caller(caller, callers) {
        return None;
    }
    handler().await
}

/// Process a message and return a response if it's an authorized command.
///
/// Returns `None` for:
/// - Messages from callers outside the whitelist, or with no sender
/// - Messages that are not commands (don't start with `/`)
///
/// Returns `Some(response)` for:
/// - Valid commands from an authorized caller
/// - Invalid commands (with error message and help)
pub async fn command_response_for_message(
    text: &str,
    caller: Option<CallerId>,
    callers: &AuthorizedCallers,
    control: &BotControl,
) -> Option<String> {
    guarded(caller, callers, || async move {
        match parse_command(text) {
            Ok(command) => Some(control.execute(command).await),
            Err(CommandParseError::NotACommand) => None,
            Err(err) => Some(format!("Invalid command: {err}\n\n{}", command_help())),
        }
    })
    .await
}

fn is_authorized_caller(caller: Option<CallerId>, callers: &AuthorizedCallers) -> bool {
    let Some(caller) = caller else {
        warn!("Ignoring Telegram message without a sender");
        return false;
    };

    match callers.authorize(caller) {
        Ok(()) => true,
        Err(denied) => {
            warn!(
                user_id = denied.0.get(),
                "Ignoring Telegram message from unauthorized user"
            );
            false
        }
    }
}
