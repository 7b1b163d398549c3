//! Registry persisted as a flat JSON object mapping name to address.
//!
//! ```json
//! {
//!   "db1": "10.0.0.5:5432",
//!   "web": "10.0.0.7:8080"
//! }
//! ```
//!
//! The older object form (`{"db1": {"address": "...", "running": false}}`)
//! is still accepted on load; saves always write the string form.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info};

use crate::domain::{ServerAddress, ServerName};
use crate::error::StoreError;
use crate::port::{RegistryStore, StoredRegistry};

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredEntry {
    Address(String),
    Object { address: String },
}

impl StoredEntry {
    fn into_address(self) -> String {
        match self {
            Self::Address(address) | Self::Object { address } => address,
        }
    }
}

/// [`RegistryStore`] backed by one JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parse(&self, content: &str) -> Result<StoredRegistry, StoreError> {
        // A blank file is treated like a fresh one.
        if content.trim().is_empty() {
            return Ok(StoredRegistry::new());
        }

        let raw: BTreeMap<String, StoredEntry> =
            serde_json::from_str(content).map_err(|source| StoreError::Corrupt {
                path: self.path.clone(),
                source,
            })?;

        raw.into_iter()
            .map(|(name, entry)| {
                let invalid = |reason: String| StoreError::InvalidEntry {
                    path: self.path.clone(),
                    name: name.clone(),
                    reason,
                };
                let address = entry.into_address();
                let parsed_name = ServerName::parse(&name).map_err(|e| invalid(e.to_string()))?;
                let parsed_address =
                    ServerAddress::parse(&address).map_err(|e| invalid(e.to_string()))?;
                Ok((parsed_name, parsed_address))
            })
            .collect()
    }
}

impl RegistryStore for JsonFileStore {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<StoredRegistry, StoreError> {
        if !self.path.exists() {
            info!(path = %self.path.display(), "Registry file not found, creating an empty one");
            let empty = StoredRegistry::new();
            self.save(&empty)?;
            return Ok(empty);
        }

        let content = fs::read_to_string(&self.path).map_err(|source| StoreError::Read {
            path: self.path.clone(),
            source,
        })?;
        let servers = self.parse(&content)?;
        debug!(path = %self.path.display(), servers = servers.len(), "Read registry file");
        Ok(servers)
    }

    /// Write to a sibling temp file, then rename over the target.
    fn save(&self, servers: &StoredRegistry) -> Result<(), StoreError> {
        let write_err = |source| StoreError::Write {
            path: self.path.clone(),
            source,
        };

        let document: BTreeMap<&str, &str> = servers
            .iter()
            .map(|(name, address)| (name.as_str(), address.as_str()))
            .collect();
        let json = serde_json::to_string_pretty(&document)
            .map_err(|e| write_err(std::io::Error::other(e)))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(write_err)?;
            }
        }

        let temp_path = self.path.with_extension("tmp");
        let cleanup_and_err = |e| {
            let _ = fs::remove_file(&temp_path);
            write_err(e)
        };

        let mut file = fs::File::create(&temp_path).map_err(write_err)?;
        file.write_all(json.as_bytes()).map_err(cleanup_and_err)?;
        file.write_all(b"\n").map_err(cleanup_and_err)?;
        file.sync_all().map_err(cleanup_and_err)?;
        fs::rename(&temp_path, &self.path).map_err(cleanup_and_err)?;

        debug!(path = %self.path.display(), servers = servers.len(), "Wrote registry file");
        Ok(())
    }
}
