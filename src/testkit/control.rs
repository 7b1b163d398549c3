//! Scripted server control.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::ServerAddress;
use crate::error::ControlError;
use crate::port::ServerControl;

/// How one address answers.
#[derive(Debug, Clone)]
struct Script {
    reachable: bool,
    running: bool,
    log: String,
    delay: Option<Duration>,
    failure: Option<ControlError>,
}

impl Default for Script {
    fn default() -> Self {
        Self {
            reachable: true,
            running: false,
            log: String::new(),
            delay: None,
            failure: None,
        }
    }
}

/// [`ServerControl`] double with per-address answers.
///
/// Unscripted addresses are reachable, not running, and have an empty log.
/// Every call is recorded as `(operation, address)`.
#[derive(Default)]
pub struct ScriptedControl {
    scripts: HashMap<String, Script>,
    calls: Mutex<Vec<(&'static str, String)>>,
}

impl ScriptedControl {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn reachable(mut self, address: &str, reachable: bool) -> Self {
        self.script(address).reachable = reachable;
        self
    }

    #[must_use]
    pub fn running(mut self, address: &str, running: bool) -> Self {
        self.script(address).running = running;
        self
    }

    #[must_use]
    pub fn log(mut self, address: &str, log: &str) -> Self {
        self.script(address).log = log.to_string();
        self
    }

    /// Delay every answer from `address`, e.g. to outlast a call timeout.
    #[must_use]
    pub fn delay(mut self, address: &str, delay: Duration) -> Self {
        self.script(address).delay = Some(delay);
        self
    }

    /// Make every call to `address` fail with `failure`.
    #[must_use]
    pub fn fail(mut self, address: &str, failure: ControlError) -> Self {
        self.script(address).failure = Some(failure);
        self
    }

    /// Calls made so far, in order.
    #[must_use]
    pub fn calls(&self) -> Vec<(&'static str, String)> {
        self.calls.lock().clone()
    }

    /// Number of calls for one operation.
    #[must_use]
    pub fn call_count(&self, operation: &str) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|(op, _)| *op == operation)
            .count()
    }

    fn script(&mut self, address: &str) -> &mut Script {
        self.scripts.entry(address.to_string()).or_default()
    }

    async fn answer(
        &self,
        operation: &'static str,
        address: &ServerAddress,
    ) -> Result<Script, ControlError> {
        self.calls
            .lock()
            .push((operation, address.as_str().to_string()));

        let script = self
            .scripts
            .get(address.as_str())
            .cloned()
            .unwrap_or_default();

        if let Some(delay) = script.delay {
            tokio::time::sleep(delay).await;
        }
        match script.failure {
            Some(failure) => Err(failure),
            None => Ok(script),
        }
    }
}

#[async_trait]
impl ServerControl for ScriptedControl {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn probe(&self, address: &ServerAddress) -> Result<bool, ControlError> {
        Ok(self.answer("probe", address).await?.reachable)
    }

    async fn is_running(&self, address: &ServerAddress) -> Result<bool, ControlError> {
        Ok(self.answer("is_running", address).await?.running)
    }

    async fn start(&self, address: &ServerAddress) -> Result<(), ControlError> {
        self.answer("start", address).await.map(|_| ())
    }

    async fn stop(&self, address: &ServerAddress) -> Result<(), ControlError> {
        self.answer("stop", address).await.map(|_| ())
    }

    async fn fetch_log(&self, address: &ServerAddress) -> Result<String, ControlError> {
        Ok(self.answer("log", address).await?.log)
    }
}
