//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`store`] - [`MemoryStore`](store::MemoryStore), a
//!   [`RegistryStore`](crate::port::RegistryStore) with injectable write failures.
//! - [`control`] - [`ScriptedControl`](control::ScriptedControl), a
//!   [`ServerControl`](crate::port::ServerControl) with per-address answers,
//!   delays and a call log.

pub mod control;
pub mod store;
