//! Handler for the `run` command.

use std::path::Path;
use std::sync::Arc;

use tokio::signal;
use tracing::info;

use crate::adapter::inbound::cli::command::RunArgs;
use crate::adapter::inbound::cli::{output, paths};
use crate::adapter::inbound::telegram::bot::run_bot;
use crate::adapter::inbound::telegram::control::BotControl;
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::Config;

/// Execute the run command.
pub async fn execute(args: &RunArgs) -> Result<()> {
    let config_path = paths::resolve_config(args.config.as_deref());
    let mut config = Config::load(config_path.as_deref())?;
    if let Some(registry) = &args.registry {
        config.registry.path = registry.clone();
    }
    config
        .logging
        .apply_overrides(args.log_level.as_deref(), args.json_logs);

    if !output::is_quiet() {
        print_startup_config(&config, config_path.as_deref());
    }

    config.init_logging();
    info!(version = env!("CARGO_PKG_VERSION"), "basoka starting");

    let config = Arc::new(config);
    let registry = bootstrap::build_registry(&config)?;
    let control = BotControl::new(registry);

    tokio::select! {
        () = run_bot(&config.telegram, control) => {}
        _ = signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
    }

    info!("basoka stopped");
    Ok(())
}

fn print_startup_config(config: &Config, config_path: Option<&Path>) {
    output::header(env!("CARGO_PKG_VERSION"));
    output::field(
        "Config",
        config_path.map_or_else(|| "(defaults)".to_string(), |path| path.display().to_string()),
    );
    output::field("Registry", config.registry.path.display());
    output::field("Agent", &config.agent.base_url);
    output::field("Timeout", format!("{}s", config.agent.timeout_secs));
    output::field("Users", config.telegram.authorized_callers.len());
}
