//! HTTP client for the agent running on each managed server.

mod client;

pub use client::HttpAgent;
