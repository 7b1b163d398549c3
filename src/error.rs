use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::domain::identity::CallerId;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Failures reading or writing the durable registry document.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to read registry file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write registry file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("registry file {path} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("registry file {path} holds an invalid entry `{name}`: {reason}")]
    InvalidEntry {
        path: PathBuf,
        name: String,
        reason: String,
    },
}

/// Registry record errors.
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("invalid server name `{name}`: {reason}")]
    InvalidName { name: String, reason: &'static str },

    #[error("server `{0}` already exists")]
    DuplicateName(String),

    #[error("invalid address `{address}`: {reason}")]
    InvalidAddress { address: String, reason: String },

    #[error("server `{0}` not found")]
    NotFound(String),

    #[error("failed to persist registry: {0}")]
    Persistence(#[from] StoreError),
}

/// Failures talking to the agent on a managed server.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ControlError {
    #[error("no answer from {address} within {}s", after.as_secs())]
    Timeout { address: String, after: Duration },

    #[error("{address} is unreachable: {reason}")]
    Unreachable { address: String, reason: String },

    #[error("{address} rejected the request with status {status}")]
    Rejected { address: String, status: u16 },

    #[error("request to {address} failed: {reason}")]
    Transport { address: String, reason: String },

    #[error("unexpected response from {address}: {reason}")]
    InvalidResponse { address: String, reason: String },
}

/// A command from a caller outside the authorized set.
///
/// Only ever logged; the caller never sees it.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("caller {0} is not authorized")]
pub struct Unauthorized(pub CallerId);

/// Crate-wide error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Control(#[from] ControlError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_errors_render_the_server_name() {
        assert_eq!(
            RegistryError::DuplicateName("db1".into()).to_string(),
            "server `db1` already exists"
        );
        assert_eq!(
            RegistryError::NotFound("db1".into()).to_string(),
            "server `db1` not found"
        );
    }

    #[test]
    fn timeout_renders_whole_seconds() {
        let err = ControlError::Timeout {
            address: "10.0.0.5:5432".into(),
            after: Duration::from_secs(5),
        };
        assert_eq!(err.to_string(), "no answer from 10.0.0.5:5432 within 5s");
    }

    #[test]
    fn wrapped_errors_are_transparent() {
        let err: Error = RegistryError::NotFound("web".into()).into();
        assert_eq!(err.to_string(), "server `web` not found");
    }
}
