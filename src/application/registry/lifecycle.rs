use std::future::Future;

use futures_util::future::join_all;
use tracing::{debug, info, warn};

use crate::domain::{BulkReport, ServerOutcome, ServerRecord};
use crate::error::{ControlError, Result};

use super::ServerRegistry;

impl ServerRegistry {
    /// Probe one server's reachability.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown name, or the probe's [`ControlError`]
    /// (including a timeout).
    pub async fn status(&self, name: &str) -> Result<bool> {
        let record = self.get(name)?;
        let reachable = self
            .bounded(&record, "probe", self.control.probe(&record.address))
            .await?;
        Ok(reachable)
    }

    /// Probe every server concurrently.
    ///
    /// A failing or hung probe only affects its own entry.
    pub async fn status_all(&self) -> BulkReport<bool> {
        let records = self.list();
        let results = join_all(
            records
                .iter()
                .map(|record| self.bounded(record, "probe", self.control.probe(&record.address))),
        )
        .await;
        report(records, results)
    }

    /// Ask one server's agent whether its process is running.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown name, or the agent call's [`ControlError`].
    pub async fn is_running(&self, name: &str) -> Result<bool> {
        let record = self.get(name)?;
        let running = self
            .bounded(&record, "is_running", self.control.is_running(&record.address))
            .await?;
        Ok(running)
    }

    /// Start one server.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown name, or the agent call's [`ControlError`].
    pub async fn start(&self, name: &str) -> Result<()> {
        let record = self.get(name)?;
        self.bounded(&record, "start", self.control.start(&record.address))
            .await?;
        info!(server = %record.name, "Server started");
        Ok(())
    }

    /// Stop one server.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown name, or the agent call's [`ControlError`].
    pub async fn stop(&self, name: &str) -> Result<()> {
        let record = self.get(name)?;
        self.bounded(&record, "stop", self.control.stop(&record.address))
            .await?;
        info!(server = %record.name, "Server stopped");
        Ok(())
    }

    /// Start every server, attempting all of them even if some fail.
    pub async fn start_all(&self) -> BulkReport<()> {
        let records = self.list();
        let results = join_all(
            records
                .iter()
                .map(|record| self.bounded(record, "start", self.control.start(&record.address))),
        )
        .await;
        let report = report(records, results);
        info!(
            succeeded = report.succeeded(),
            total = report.total(),
            "Start-all finished"
        );
        report
    }

    /// Stop every server, attempting all of them even if some fail.
    pub async fn stop_all(&self) -> BulkReport<()> {
        let records = self.list();
        let results = join_all(
            records
                .iter()
                .map(|record| self.bounded(record, "stop", self.control.stop(&record.address))),
        )
        .await;
        let report = report(records, results);
        info!(
            succeeded = report.succeeded(),
            total = report.total(),
            "Stop-all finished"
        );
        report
    }

    /// Fetch one server's log.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown name, or the agent call's [`ControlError`].
    pub async fn log(&self, name: &str) -> Result<String> {
        let record = self.get(name)?;
        let log = self
            .bounded(&record, "log", self.control.fetch_log(&record.address))
            .await?;
        Ok(log)
    }

    /// Run one collaborator call under the registry's timeout.
    async fn bounded<T, F>(
        &self,
        record: &ServerRecord,
        operation: &'static str,
        call: F,
    ) -> std::result::Result<T, ControlError>
    where
        F: Future<Output = std::result::Result<T, ControlError>>,
    {
        debug!(server = %record.name, operation, "Calling server agent");

        let result = match tokio::time::timeout(self.call_timeout, call).await {
            Ok(result) => result,
            Err(_) => Err(ControlError::Timeout {
                address: record.address.to_string(),
                after: self.call_timeout,
            }),
        };

        if let Err(err) = &result {
            warn!(server = %record.name, operation, error = %err, "Server agent call failed");
        }
        result
    }
}

fn report<T>(
    records: Vec<ServerRecord>,
    results: Vec<std::result::Result<T, ControlError>>,
) -> BulkReport<T> {
    BulkReport::new(
        records
            .into_iter()
            .zip(results)
            .map(|(record, result)| ServerOutcome::new(record, result))
            .collect(),
    )
}
