//! Process-control port for managed servers.
//!
//! Each managed server runs a small agent; implementations of
//! [`ServerControl`] talk to it by address. The registry bounds every call
//! with its own timeout, so implementations need not.

use async_trait::async_trait;

use crate::domain::ServerAddress;
use crate::error::ControlError;

/// Remote probe and lifecycle control for one server address.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`: bulk operations call the same
/// instance concurrently for every registered server.
#[async_trait]
pub trait ServerControl: Send + Sync {
    /// Return the backend name for logging.
    fn name(&self) -> &'static str;

    /// Reachability check. `Ok(false)` means the server answered "down" or
    /// refused the connection.
    async fn probe(&self, address: &ServerAddress) -> Result<bool, ControlError>;

    /// Ask the agent whether its managed process is running.
    async fn is_running(&self, address: &ServerAddress) -> Result<bool, ControlError>;

    /// Start the managed process.
    async fn start(&self, address: &ServerAddress) -> Result<(), ControlError>;

    /// Stop the managed process.
    async fn stop(&self, address: &ServerAddress) -> Result<(), ControlError>;

    /// Fetch recent log output.
    async fn fetch_log(&self, address: &ServerAddress) -> Result<String, ControlError>;
}
