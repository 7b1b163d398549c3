//! Command-line interface definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Telegram bot for managing a registry of servers
#[derive(Parser, Debug)]
#[command(name = "basoka")]
#[command(version)]
pub struct Cli {
    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the Telegram bot (foreground)
    Run(RunArgs),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),

    /// Inspect the stored server registry
    #[command(subcommand)]
    Servers(ServersCommand),
}

/// Subcommands for `basoka check`.
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate configuration and environment without starting the bot.
    Config(ConfigPathArg),
}

/// Subcommands for `basoka servers`.
#[derive(Subcommand, Debug)]
pub enum ServersCommand {
    /// Print every stored server without contacting any of them.
    List(ServersListArgs),
}

/// Arguments for `basoka run`.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Path to the TOML config file [default: basoka.toml if present]
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the registry file path
    #[arg(long)]
    pub registry: Option<PathBuf>,

    /// Override the log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,
}

/// Shared `--config` argument.
#[derive(Args, Debug)]
pub struct ConfigPathArg {
    /// Path to the TOML config file [default: basoka.toml if present]
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Arguments for `basoka servers list`.
#[derive(Args, Debug)]
pub struct ServersListArgs {
    /// Path to the TOML config file [default: basoka.toml if present]
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Registry file to read (overrides the config file)
    #[arg(long)]
    pub registry: Option<PathBuf>,
}
