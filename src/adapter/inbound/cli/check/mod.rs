//! Diagnostic command handlers.

mod config;

pub use config::execute_config;
