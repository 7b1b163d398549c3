//! Configuration loading: an optional TOML file plus environment secrets.

pub mod agent;
pub mod logging;
pub mod registry;
pub mod settings;
pub mod telegram;

pub use agent::{AgentConfig, AgentEndpoints};
pub use logging::LoggingConfig;
pub use registry::RegistryConfig;
pub use settings::Config;
pub use telegram::TelegramConfig;
