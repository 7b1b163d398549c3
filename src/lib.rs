//! Basoka - Telegram bot for managing a registry of servers.
//!
//! Authorized Telegram users register servers by name and network address,
//! check their reachability, and start, stop or inspect them through an agent
//! running on each server. The registry survives restarts in a JSON file.
//!
//! # Architecture
//!
//! The crate follows a hexagonal layout:
//!
//! - **`domain`** - Server records, caller identities and per-server outcomes
//! - **`port`** - Traits for the registry store and the server agent
//! - **`application`** - The [`ServerRegistry`](application::registry::ServerRegistry)
//! - **`adapter`** - Telegram bot and CLI (inbound); JSON store and HTTP agent (outbound)
//! - **`infrastructure`** - Configuration and wiring
//!
//! # Features
//!
//! - `testkit` - In-memory store and scripted agent for tests
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! use basoka::adapter::outbound::agent::HttpAgent;
//! use basoka::adapter::outbound::json::JsonFileStore;
//! use basoka::application::registry::ServerRegistry;
//! use basoka::infrastructure::config::AgentConfig;
//!
//! # async fn demo() -> basoka::error::Result<()> {
//! let store = Arc::new(JsonFileStore::new("servers.json"));
//! let agent = Arc::new(HttpAgent::new(&AgentConfig::default())?);
//! let registry = ServerRegistry::open(store, agent, Duration::from_secs(5))?;
//!
//! registry.add("db1", "10.0.0.5:5432")?;
//! let reachable = registry.status("db1").await?;
//! # let _ = reachable;
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
