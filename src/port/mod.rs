//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! The registry core consumes two outbound ports:
//!
//! ```text
//!                 ┌──────────────────────┐
//!   Telegram ───▶ │   Gate + Registry    │
//!                 └──────────┬───────────┘
//!                 ┌──────────┴───────────┐
//!                 ▼                      ▼
//!          ┌─────────────┐        ┌─────────────┐
//!          │RegistryStore│        │ServerControl│
//!          │ (JSON file) │        │ (HTTP agent)│
//!          └─────────────┘        └─────────────┘
//! ```
//!
//! - [`RegistryStore`] - durable name → address document
//! - [`ServerControl`] - probe, start, stop and log retrieval on a server

pub mod outbound;

pub use outbound::control::ServerControl;
pub use outbound::store::{RegistryStore, StoredRegistry};
