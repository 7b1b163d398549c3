//! Persistence port for the server registry.

use std::collections::BTreeMap;

use crate::domain::{ServerAddress, ServerName};
use crate::error::StoreError;

/// Whole-registry snapshot as read from or written to storage.
pub type StoredRegistry = BTreeMap<ServerName, ServerAddress>;

/// Durable storage for the registry document.
///
/// The document is read wholesale at startup and rewritten wholesale after
/// every mutation. Implementations must not leave a half-written document
/// behind when `save` fails.
pub trait RegistryStore: Send + Sync {
    /// Short name for logging.
    fn describe(&self) -> String;

    /// Read every stored record. A store that does not exist yet loads empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be read or does not parse.
    fn load(&self) -> Result<StoredRegistry, StoreError>;

    /// Replace the stored document with `servers`.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be written.
    fn save(&self, servers: &StoredRegistry) -> Result<(), StoreError>;
}
