//! Telegram command execution against the server registry.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::application::registry::ServerRegistry;

mod dispatch;
mod render;

/// Longest log excerpt sent in one reply, in characters.
///
/// Telegram rejects messages over 4096 characters.
pub const MAX_LOG_CHARS: usize = 3500;

/// Command executor for the Telegram bot.
#[derive(Clone)]
pub struct BotControl {
    registry: Arc<ServerRegistry>,
    started_at: DateTime<Utc>,
}

fn format_uptime(started_at: DateTime<Utc>) -> String {
    let elapsed = Utc::now() - started_at;
    let total_seconds = elapsed.num_seconds().max(0);
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{hours:02}:{minutes:02}:{seconds:02}")
}
