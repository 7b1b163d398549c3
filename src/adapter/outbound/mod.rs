//! Outbound adapters (driven side).

pub mod agent;
pub mod json;
