//! Per-server results of collaborator calls.

use crate::error::ControlError;

use super::server::ServerRecord;

/// Result of one collaborator call against one server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerOutcome<T> {
    pub record: ServerRecord,
    pub result: Result<T, ControlError>,
}

impl<T> ServerOutcome<T> {
    #[must_use]
    pub const fn new(record: ServerRecord, result: Result<T, ControlError>) -> Self {
        Self { record, result }
    }

    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Aggregated outcomes of a bulk operation, in registry order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkReport<T> {
    outcomes: Vec<ServerOutcome<T>>,
}

impl<T> BulkReport<T> {
    #[must_use]
    pub fn new(outcomes: Vec<ServerOutcome<T>>) -> Self {
        Self { outcomes }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    /// Number of servers whose call returned `Ok`.
    #[must_use]
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|outcome| outcome.is_ok()).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ServerOutcome<T>> {
        self.outcomes.iter()
    }
}
