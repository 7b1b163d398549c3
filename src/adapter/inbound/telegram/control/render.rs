use std::fmt::Write as _;
use std::sync::Arc;

use tracing::error;

use crate::application::registry::ServerRegistry;
use crate::domain::{BulkReport, ServerRecord};
use crate::error::{Error, RegistryError};

use super::super::command::command_help;
use super::{format_uptime, BotControl, MAX_LOG_CHARS};

impl BotControl {
    pub(super) fn welcome_text(&self) -> String {
        format!(
            "👋 Welcome to Basoka, the server manager bot!\n\
            ⏱️ Uptime: {}\n\n{}",
            format_uptime(self.started_at),
            command_help()
        )
    }

    pub(super) async fn add_text(&self, name: &str, address: &str) -> String {
        let (name, address) = (name.to_string(), address.to_string());
        match self
            .write_blocking(move |registry| registry.add(&name, &address))
            .await
        {
            Ok(record) => format!(
                "✅ Server '{}' added ({}).",
                record.name, record.address
            ),
            Err(text) => text,
        }
    }

    pub(super) fn list_text(&self) -> String {
        let records = self.registry.list();
        if records.is_empty() {
            return "No servers found. Use /add to add a server.".to_string();
        }

        let mut text = format!("🗂️ Servers ({})\n", records.len());
        for record in records {
            let _ = write!(text, "\n• {}: {}", record.name, record.address);
        }
        text
    }

    pub(super) async fn delete_text(&self, name: &str) -> String {
        let name = name.to_string();
        match self
            .write_blocking(move |registry| registry.delete(&name))
            .await
        {
            Ok(record) => format!("🗑️ Server '{}' deleted.", record.name),
            Err(text) => text,
        }
    }

    /// Run a registry mutation on the blocking pool; it flushes to disk.
    async fn write_blocking<F>(&self, op: F) -> Result<ServerRecord, String>
    where
        F: FnOnce(&ServerRegistry) -> Result<ServerRecord, RegistryError> + Send + 'static,
    {
        let registry = Arc::clone(&self.registry);
        match tokio::task::spawn_blocking(move || op(&registry)).await {
            Ok(result) => result.map_err(|err| registry_failure_text(&err)),
            Err(err) => {
                error!(error = %err, "Registry write task failed");
                Err(format!("⚠️ Registry write failed: {err}"))
            }
        }
    }

    pub(super) async fn status_text(&self, name: &str) -> String {
        match self.registry.status(name).await {
            Ok(true) => format!("🟢 Server '{name}' is reachable."),
            Ok(false) => format!("🔴 Server '{name}' is unreachable."),
            Err(err) => failure_text("check", name, &err),
        }
    }

    pub(super) async fn status_all_text(&self) -> String {
        let report = self.registry.status_all().await;
        if report.is_empty() {
            return "No servers found. Use /add to add a server.".to_string();
        }

        let reachable = report
            .iter()
            .filter(|outcome| matches!(outcome.result, Ok(true)))
            .count();
        let mut text = format!(
            "📡 Status: {}/{} checked, {} reachable\n",
            report.succeeded(),
            report.total(),
            reachable
        );
        for outcome in report.iter() {
            let line = match &outcome.result {
                Ok(true) => format!("🟢 {}: reachable", outcome.record.name),
                Ok(false) => format!("🔴 {}: unreachable", outcome.record.name),
                Err(err) => format!("⚠️ {}: {err}", outcome.record.name),
            };
            let _ = write!(text, "\n{line}");
        }
        text
    }

    pub(super) async fn start_text(&self, name: &str) -> String {
        match self.registry.start(name).await {
            Ok(()) => format!("▶️ Server '{name}' started."),
            Err(err) => failure_text("start", name, &err),
        }
    }

    pub(super) async fn stop_text(&self, name: &str) -> String {
        match self.registry.stop(name).await {
            Ok(()) => format!("⏹️ Server '{name}' stopped."),
            Err(err) => failure_text("stop", name, &err),
        }
    }

    pub(super) async fn start_all_text(&self) -> String {
        let report = self.registry.start_all().await;
        bulk_text("▶️ Start all", "started", &report)
    }

    pub(super) async fn stop_all_text(&self) -> String {
        let report = self.registry.stop_all().await;
        bulk_text("⏹️ Stop all", "stopped", &report)
    }

    pub(super) async fn is_running_text(&self, name: &str) -> String {
        match self.registry.is_running(name).await {
            Ok(true) => format!("✅ Server '{name}' is running."),
            Ok(false) => format!("⏸️ Server '{name}' is not running."),
            Err(err) => failure_text("query", name, &err),
        }
    }

    pub(super) async fn log_text(&self, name: &str) -> String {
        match self.registry.log(name).await {
            Ok(log) if log.trim().is_empty() => format!("📜 Log for '{name}' is empty."),
            Ok(log) => {
                let (excerpt, truncated) = tail(&log, MAX_LOG_CHARS);
                let marker = if truncated { " (last lines)" } else { "" };
                format!("📜 Log for '{name}'{marker}:\n\n{excerpt}")
            }
            Err(err) => failure_text("fetch the log of", name, &err),
        }
    }
}

fn bulk_text(title: &str, verb: &str, report: &BulkReport<()>) -> String {
    if report.is_empty() {
        return "No servers found. Use /add to add a server.".to_string();
    }

    let mut text = format!(
        "{title}: {}/{} succeeded\n",
        report.succeeded(),
        report.total()
    );
    for outcome in report.iter() {
        let line = match &outcome.result {
            Ok(()) => format!("✅ {}: {verb}", outcome.record.name),
            Err(err) => format!("❌ {}: {err}", outcome.record.name),
        };
        let _ = write!(text, "\n{line}");
    }
    text
}

fn registry_failure_text(err: &RegistryError) -> String {
    match err {
        RegistryError::NotFound(name) => format!("❌ Server '{name}' not found."),
        RegistryError::DuplicateName(name) => format!("❌ Server '{name}' already exists."),
        RegistryError::InvalidName { .. } | RegistryError::InvalidAddress { .. } => {
            format!("❌ {err}")
        }
        RegistryError::Persistence(_) => format!("⚠️ {err}"),
    }
}

fn failure_text(action: &str, name: &str, err: &Error) -> String {
    match err {
        Error::Registry(err) => registry_failure_text(err),
        Error::Control(err) => format!("⚠️ Could not {action} '{name}': {err}"),
        other => format!("⚠️ {other}"),
    }
}

/// Last `max_chars` characters of `text`, and whether anything was cut.
fn tail(text: &str, max_chars: usize) -> (&str, bool) {
    let count = text.chars().count();
    if count <= max_chars {
        return (text, false);
    }
    let start = text
        .char_indices()
        .nth(count - max_chars)
        .map_or(0, |(index, _)| index);
    (&text[start..], true)
}
