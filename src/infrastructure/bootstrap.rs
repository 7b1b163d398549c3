//! Composition root: wires the registry to its store and agent.

use std::sync::Arc;

use tracing::info;

use crate::adapter::outbound::agent::HttpAgent;
use crate::adapter::outbound::json::JsonFileStore;
use crate::application::registry::ServerRegistry;
use crate::error::Result;
use crate::infrastructure::config::Config;

/// Build the server registry described by `config`.
///
/// # Errors
///
/// Fails if the registry file cannot be read or is corrupt, or the HTTP
/// client cannot be built. Both are fatal at startup.
pub fn build_registry(config: &Config) -> Result<Arc<ServerRegistry>> {
    let store = Arc::new(JsonFileStore::new(config.registry.path.clone()));
    let agent = Arc::new(HttpAgent::new(&config.agent)?);

    info!(
        base_url = %config.agent.base_url,
        timeout_secs = config.agent.timeout_secs,
        "Server agent configured"
    );

    let registry = ServerRegistry::open(store, agent, config.agent.timeout())?;
    Ok(Arc::new(registry))
}
