//! Long-polling Telegram listener.

use std::sync::Arc;

use teloxide::prelude::*;
use teloxide::types::BotCommand;
use tracing::{error, info, warn};

use super::auth::command_response_for_message;
use super::command::bot_commands;
use super::control::BotControl;
use crate::domain::CallerId;
use crate::infrastructure::config::TelegramConfig;

/// Telegram's limit for one message, in characters.
const MAX_MESSAGE_CHARS: usize = 4096;

/// Listen for commands until the dispatcher stops (Ctrl+C).
pub async fn run_bot(config: &TelegramConfig, control: BotControl) {
    let bot = Bot::new(&config.bot_token);

    // Register commands with Telegram so they appear in the "/" menu
    if config.register_commands {
        if let Err(e) = register_bot_commands(&bot).await {
            warn!(error = %e, "Failed to register bot commands with Telegram");
        }
    }

    info!(
        authorized_users = config.authorized_callers.len(),
        "Telegram command listener started"
    );

    let callers = Arc::new(config.authorized_callers.clone());

    teloxide::repl(bot, move |bot: Bot, msg: Message| {
        let control = control.clone();
        let callers = Arc::clone(&callers);
        async move {
            let Some(text) = msg.text() else {
                return respond(());
            };

            if let Some(response) =
                command_response_for_message(text, message_caller(&msg), &callers, &control).await
            {
                for chunk in split_message(&response, MAX_MESSAGE_CHARS) {
                    if let Err(e) = bot.send_message(msg.chat.id, chunk).await {
                        error!(error = %e, "Failed to send Telegram command response");
                        break;
                    }
                }
            }

            respond(())
        }
    })
    .await;

    info!("Telegram command listener stopped");
}

/// Sender of a message, if Telegram reported one.
fn message_caller(msg: &Message) -> Option<CallerId> {
    msg.from.as_ref().map(|user| CallerId::new(user.id.0))
}

/// Split a reply into messages of at most `max_chars` characters.
///
/// Breaks fall on line boundaries; a single line longer than the limit is
/// cut mid-line.
fn split_message(text: &str, max_chars: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_chars = 0;

    for line in text.split_inclusive('\n') {
        let mut line = line;
        let mut line_chars = line.chars().count();

        if current_chars + line_chars > max_chars && !current.is_empty() {
            chunks.push(std::mem::take(&mut current));
            current_chars = 0;
        }
        while line_chars > max_chars {
            let cut = line
                .char_indices()
                .nth(max_chars)
                .map_or(line.len(), |(index, _)| index);
            chunks.push(line[..cut].to_string());
            line = &line[cut..];
            line_chars -= max_chars;
        }
        current.push_str(line);
        current_chars += line_chars;
    }
    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}

/// Register bot commands with Telegram for the "/" menu.
async fn register_bot_commands(bot: &Bot) -> Result<(), teloxide::RequestError> {
    let commands: Vec<BotCommand> = bot_commands()
        .into_iter()
        .map(|(cmd, desc)| BotCommand::new(cmd, desc))
        .collect();

    bot.set_my_commands(commands).await?;
    info!("Registered bot commands with Telegram");
    Ok(())
}
