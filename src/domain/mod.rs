//! Transport-agnostic types: server records, caller identities, outcomes.

pub mod identity;
pub mod outcome;
pub mod server;

pub use identity::{AuthorizedCallers, CallerId};
pub use outcome::{BulkReport, ServerOutcome};
pub use server::{ServerAddress, ServerName, ServerRecord};
