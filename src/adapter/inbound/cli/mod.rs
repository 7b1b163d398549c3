//! Command-line interface.

pub mod check;
pub mod command;
pub mod output;
pub mod paths;
pub mod run;
pub mod servers;

use crate::error::Result;

use command::{CheckCommand, Cli, Commands, ServersCommand};
use output::OutputConfig;

/// Dispatch a parsed command line.
pub async fn execute(cli: Cli) -> Result<()> {
    output::configure(OutputConfig::new(cli.json, cli.quiet));

    match cli.command {
        Commands::Run(args) => run::execute(&args).await,
        Commands::Check(CheckCommand::Config(arg)) => check::execute_config(arg.config.as_deref()),
        Commands::Servers(ServersCommand::List(args)) => servers::execute_list(&args),
    }
}
