//! Server agent (HTTP collaborator) configuration.

use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;

/// Placeholder replaced by a server's `host:port` in [`AgentConfig::base_url`].
pub const ADDRESS_PLACEHOLDER: &str = "{address}";

const fn default_timeout_secs() -> u64 {
    5
}

fn default_base_url() -> String {
    format!("http://{ADDRESS_PLACEHOLDER}")
}

/// How to reach the agent on each managed server.
#[derive(Debug, Clone, Deserialize)]
pub struct AgentConfig {
    /// URL template; must contain `{address}` (default: `http://{address}`).
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Bound on each agent call in seconds (default: 5).
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Endpoint paths appended to the base URL.
    #[serde(default)]
    pub endpoints: AgentEndpoints,
}

impl AgentConfig {
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if !self.base_url.contains(ADDRESS_PLACEHOLDER) {
            return Err(ConfigError::InvalidValue {
                field: "agent.base_url",
                reason: format!("must contain {ADDRESS_PLACEHOLDER}"),
            });
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "agent.timeout_secs",
                reason: "must be greater than 0".into(),
            });
        }
        self.endpoints.validate()
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            endpoints: AgentEndpoints::default(),
        }
    }
}

/// Agent endpoint paths.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AgentEndpoints {
    pub is_running: String,
    pub status: String,
    pub start: String,
    pub stop: String,
    pub log: String,
}

impl AgentEndpoints {
    fn validate(&self) -> Result<(), ConfigError> {
        let endpoints = [
            ("agent.endpoints.is_running", &self.is_running),
            ("agent.endpoints.status", &self.status),
            ("agent.endpoints.start", &self.start),
            ("agent.endpoints.stop", &self.stop),
            ("agent.endpoints.log", &self.log),
        ];
        for (field, path) in endpoints {
            if !path.starts_with('/') {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: format!("`{path}` must start with /"),
                });
            }
        }
        Ok(())
    }
}

impl Default for AgentEndpoints {
    fn default() -> Self {
        Self {
            is_running: "/is_running".into(),
            status: "/status".into(),
            start: "/start".into(),
            stop: "/stop".into(),
            log: "/log".into(),
        }
    }
}
