//! Terminal output for CLI commands.
//!
//! Human-readable lines use colored symbols. With `--json` every item is
//! printed as one JSON line of the form `{"type": ..., "payload": ...}`;
//! with `--quiet` only warnings, errors and data lines are printed.

use std::fmt::Display;
use std::sync::OnceLock;

use owo_colors::OwoColorize;
use serde_json::{json, Value};

/// Runtime output configuration shared by CLI handlers.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    /// Emit machine-readable JSON output instead of human-readable text.
    pub json: bool,
    /// Suppress non-essential output.
    pub quiet: bool,
}

impl OutputConfig {
    #[must_use]
    pub const fn new(json: bool, quiet: bool) -> Self {
        Self { json, quiet }
    }
}

static OUTPUT_CONFIG: OnceLock<OutputConfig> = OnceLock::new();

fn current() -> OutputConfig {
    OUTPUT_CONFIG.get().copied().unwrap_or_default()
}

/// How a line behaves under `--quiet`.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Level {
    /// Dropped in quiet mode.
    Chatter,
    /// Always printed.
    Essential,
}

/// Print one item either as a JSON line or through `text`.
fn emit(level: Level, kind: &str, payload: Value, text: impl FnOnce()) {
    let config = current();
    if config.json {
        println!("{}", json!({ "type": kind, "payload": payload }));
    } else if level == Level::Essential || !config.quiet {
        text();
    }
}

/// Apply output settings from global CLI flags. Only the first call counts.
pub fn configure(config: OutputConfig) {
    let _ = OUTPUT_CONFIG.set(config);
}

/// Return whether quiet mode is enabled.
#[must_use]
pub fn is_quiet() -> bool {
    current().quiet
}

/// Print the application header with name and version.
pub fn header(version: &str) {
    emit(
        Level::Chatter,
        "header",
        json!({ "app": "basoka", "version": version }),
        || println!("{} {}\n", "basoka".bold(), version.dimmed()),
    );
}

pub fn section(title: &str) {
    emit(Level::Chatter, "section", json!({ "title": title }), || {
        println!("\n{}", title.bold());
    });
}

/// Print a labeled value.
pub fn field(label: &str, value: impl Display) {
    let value = value.to_string();
    emit(
        Level::Chatter,
        "field",
        json!({ "label": label, "value": value }),
        || println!("  {:<12} {}", label.dimmed(), value),
    );
}

/// Print one registered server; quiet mode prints `name address`.
pub fn server(name: &str, address: &str) {
    emit(
        Level::Essential,
        "server",
        json!({ "name": name, "address": address }),
        || {
            if is_quiet() {
                println!("{name} {address}");
            } else {
                println!("  {:<16} {}", name.cyan(), address);
            }
        },
    );
}

pub fn success(message: &str) {
    emit(Level::Chatter, "success", json!({ "message": message }), || {
        println!("  {} {}", "✓".green(), message);
    });
}

pub fn warning(message: &str) {
    emit(Level::Essential, "warning", json!({ "message": message }), || {
        println!("  {} {}", "⚠".yellow(), message);
    });
}

pub fn hint(message: &str) {
    emit(Level::Chatter, "hint", json!({ "message": message }), || {
        println!("  {}: {}", "hint".cyan().dimmed(), message.dimmed());
    });
}

/// Print an error line to stderr.
pub fn error(message: &str) {
    if current().json {
        eprintln!(
            "{}",
            json!({ "type": "error", "payload": { "message": message } })
        );
    } else {
        eprintln!("  {} {}", "×".red(), message);
    }
}
