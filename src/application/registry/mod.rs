//! Server registry: durable records plus lifecycle delegation.
//!
//! Record mutations ([`ServerRegistry::add`], [`ServerRegistry::delete`])
//! are serialized by a writer lock held across the store flush, so two
//! concurrent writers cannot lose each other's update. The record map itself
//! is locked only to snapshot or swap, so readers never wait on the disk. Lifecycle operations
//! snapshot the records, release the lock, and call the [`ServerControl`]
//! port concurrently with a per-call timeout.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tracing::info;

use crate::error::StoreError;
use crate::port::{RegistryStore, ServerControl, StoredRegistry};

mod lifecycle;
mod records;

/// Registry of managed servers.
pub struct ServerRegistry {
    servers: Mutex<StoredRegistry>,
    writes: Mutex<()>,
    store: Arc<dyn RegistryStore>,
    control: Arc<dyn ServerControl>,
    call_timeout: Duration,
}

impl ServerRegistry {
    /// Load the registry from `store`.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored document is unreadable or corrupt.
    /// Callers should treat this as fatal rather than start empty.
    pub fn open(
        store: Arc<dyn RegistryStore>,
        control: Arc<dyn ServerControl>,
        call_timeout: Duration,
    ) -> Result<Self, StoreError> {
        let servers = store.load()?;
        info!(
            store = %store.describe(),
            control = control.name(),
            servers = servers.len(),
            "Server registry loaded"
        );

        Ok(Self {
            servers: Mutex::new(servers),
            writes: Mutex::new(()),
            store,
            control,
            call_timeout,
        })
    }

    /// Bound applied to each probe or control call.
    #[must_use]
    pub const fn call_timeout(&self) -> Duration {
        self.call_timeout
    }
}
