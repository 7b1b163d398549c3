use tracing::{error, info};

use crate::domain::{ServerAddress, ServerName, ServerRecord};
use crate::error::RegistryError;

use super::ServerRegistry;

impl ServerRegistry {
    /// Register a new server and persist the registry.
    ///
    /// # Errors
    ///
    /// `InvalidName`, `InvalidAddress`, `DuplicateName`, or `Persistence`
    /// when the flush fails. On any error the registry is unchanged.
    pub fn add(&self, name: &str, address: &str) -> Result<ServerRecord, RegistryError> {
        let name = ServerName::parse(name)?;
        let address = ServerAddress::parse(address)?;

        let _writer = self.writes.lock();
        let mut next = self.servers.lock().clone();
        if next.contains_key(&name) {
            return Err(RegistryError::DuplicateName(name.to_string()));
        }

        next.insert(name.clone(), address.clone());
        self.flush(&next)?;
        *self.servers.lock() = next;

        info!(server = %name, address = %address, "Server added");
        Ok(ServerRecord::new(name, address))
    }

    /// All records, ordered by name.
    #[must_use]
    pub fn list(&self) -> Vec<ServerRecord> {
        self.servers
            .lock()
            .iter()
            .map(|(name, address)| ServerRecord::new(name.clone(), address.clone()))
            .collect()
    }

    /// Look up one record.
    ///
    /// # Errors
    ///
    /// `NotFound` if no server has this name.
    pub fn get(&self, name: &str) -> Result<ServerRecord, RegistryError> {
        self.servers
            .lock()
            .get_key_value(name)
            .map(|(name, address)| ServerRecord::new(name.clone(), address.clone()))
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))
    }

    /// Remove a server and persist the registry.
    ///
    /// # Errors
    ///
    /// `NotFound` if absent (nothing is written), `Persistence` when the
    /// flush fails (the record stays).
    pub fn delete(&self, name: &str) -> Result<ServerRecord, RegistryError> {
        let _writer = self.writes.lock();
        let mut next = self.servers.lock().clone();
        let Some((key, address)) = next.remove_entry(name) else {
            return Err(RegistryError::NotFound(name.to_string()));
        };
        self.flush(&next)?;
        *self.servers.lock() = next;

        info!(server = %key, "Server deleted");
        Ok(ServerRecord::new(key, address))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.servers.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.servers.lock().is_empty()
    }

    fn flush(&self, next: &crate::port::StoredRegistry) -> Result<(), RegistryError> {
        self.store.save(next).map_err(|err| {
            error!(error = %err, store = %self.store.describe(), "Failed to persist registry");
            RegistryError::Persistence(err)
        })
    }
}
