use std::path::Path;

use crate::adapter::inbound::cli::{output, paths};
use crate::error::Result;
use crate::infrastructure::config::Config;

/// Validate configuration and environment without starting the bot.
///
/// Prints a summary of the effective settings. The bot token is never shown.
pub fn execute_config(config_path: Option<&Path>) -> Result<()> {
    let path = paths::resolve_config(config_path);
    let config = Config::load(path.as_deref())?;

    output::section("Configuration Check");
    match &path {
        Some(path) => output::field("Config", path.display()),
        None => output::field("Config", "(defaults)"),
    }
    output::success("Configuration is valid");

    output::section("Summary");
    output::field("Registry", config.registry.path.display());
    output::field("Agent", &config.agent.base_url);
    output::field("Timeout", format!("{}s", config.agent.timeout_secs));
    output::field("Users", config.telegram.authorized_callers.len());
    output::field("Log level", &config.logging.level);
    output::field("Log format", &config.logging.format);

    if config.telegram.register_commands {
        output::field("Bot menu", "registered at startup");
    } else {
        output::field("Bot menu", "not registered");
    }

    if config.registry.path.exists() {
        output::success("Registry file found");
    } else {
        output::warning("Registry file does not exist yet; it will be created at startup");
    }

    output::success("Configuration check complete");

    Ok(())
}
