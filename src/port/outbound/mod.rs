//! Outbound ports (driven side): interfaces implemented by outbound adapters.

pub mod control;
pub mod store;
