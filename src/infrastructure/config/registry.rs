//! Registry storage configuration.

use std::path::PathBuf;

use serde::Deserialize;

fn default_path() -> PathBuf {
    PathBuf::from("servers.json")
}

/// Where the registry document lives.
#[derive(Debug, Clone, Deserialize)]
pub struct RegistryConfig {
    /// Path to the JSON registry file (default: `servers.json`).
    #[serde(default = "default_path")]
    pub path: PathBuf,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}
