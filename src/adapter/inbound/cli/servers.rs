//! Handler for `servers list`.

use crate::adapter::inbound::cli::command::ServersListArgs;
use crate::adapter::inbound::cli::{output, paths};
use crate::adapter::outbound::json::JsonFileStore;
use crate::error::Result;
use crate::infrastructure::config::Config;
use crate::port::RegistryStore;

/// Print the stored registry without contacting any server.
///
/// A missing registry file is reported, not created.
pub fn execute_list(args: &ServersListArgs) -> Result<()> {
    let path = match &args.registry {
        Some(path) => path.clone(),
        None => Config::load_registry(paths::resolve_config(args.config.as_deref()).as_deref())?.path,
    };

    if !path.exists() {
        output::warning(&format!("Registry file {} does not exist", path.display()));
        output::hint("servers are added with /add through the bot");
        return Ok(());
    }

    let servers = JsonFileStore::new(path.clone()).load()?;

    output::section(&format!("Servers ({})", servers.len()));
    if servers.is_empty() {
        output::hint("no servers registered");
    }
    for (name, address) in &servers {
        output::server(name.as_str(), address.as_str());
    }

    Ok(())
}
