use std::sync::Arc;

use chrono::Utc;

use crate::application::registry::ServerRegistry;

use super::super::command::{command_help, ServerCommand};
use super::BotControl;

impl BotControl {
    #[must_use]
    pub fn new(registry: Arc<ServerRegistry>) -> Self {
        Self {
            registry,
            started_at: Utc::now(),
        }
    }

    /// Registry this control operates on.
    #[must_use]
    pub fn registry(&self) -> &ServerRegistry {
        &self.registry
    }

    /// Execute one parsed command and return response text.
    pub async fn execute(&self, command: ServerCommand) -> String {
        match command {
            ServerCommand::Start => self.welcome_text(),
            ServerCommand::Help => command_help(),
            ServerCommand::Add { name, address } => self.add_text(&name, &address).await,
            ServerCommand::List => self.list_text(),
            ServerCommand::Status { name } => self.status_text(&name).await,
            ServerCommand::StatusAll => self.status_all_text().await,
            ServerCommand::StartServer { name } => self.start_text(&name).await,
            ServerCommand::StopServer { name } => self.stop_text(&name).await,
            ServerCommand::StartAll => self.start_all_text().await,
            ServerCommand::StopAll => self.stop_all_text().await,
            ServerCommand::IsRunning { name } => self.is_running_text(&name).await,
            ServerCommand::Delete { name } => self.delete_text(&name).await,
            ServerCommand::Log { name } => self.log_text(&name).await,
        }
    }
}
