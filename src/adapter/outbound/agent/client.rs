//! HTTP agent client.
//!
//! Implements [`ServerControl`] against a small HTTP agent on each managed
//! server. With the default configuration a server registered as
//! `10.0.0.5:8000` is driven through:
//!
//! | Operation    | Request                                 | Success          |
//! |--------------|-----------------------------------------|------------------|
//! | `probe`      | `GET  http://10.0.0.5:8000/status`      | any 2xx          |
//! | `is_running` | `GET  http://10.0.0.5:8000/is_running`  | `{"running": b}` |
//! | `start`      | `POST http://10.0.0.5:8000/start`       | 200              |
//! | `stop`       | `POST http://10.0.0.5:8000/stop`        | 200              |
//! | `fetch_log`  | `GET  http://10.0.0.5:8000/log`         | 2xx, text/JSON   |

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::domain::ServerAddress;
use crate::error::{ControlError, Result};
use crate::infrastructure::config::agent::{AgentConfig, AgentEndpoints, ADDRESS_PLACEHOLDER};
use crate::port::ServerControl;

#[derive(Deserialize)]
struct RunningResponse {
    #[serde(default)]
    running: bool,
}

#[derive(Deserialize)]
struct LogResponse {
    log: String,
}

/// [`ServerControl`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpAgent {
    /// HTTP client for agent requests.
    client: Client,
    /// URL template containing `{address}`.
    base_url: String,
    /// Endpoint paths.
    endpoints: AgentEndpoints,
    /// Client-side request timeout, reported in timeout errors.
    timeout: Duration,
}

impl HttpAgent {
    /// Create a client from agent configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &AgentConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            endpoints: config.endpoints.clone(),
            timeout: config.timeout(),
        })
    }

    fn url(
        &self,
        address: &ServerAddress,
        endpoint: &str,
    ) -> std::result::Result<Url, ControlError> {
        let base = self.base_url.replace(ADDRESS_PLACEHOLDER, address.as_str());
        let raw = format!("{}{}", base.trim_end_matches('/'), endpoint);
        Url::parse(&raw).map_err(|err| ControlError::Transport {
            address: address.to_string(),
            reason: format!("invalid agent URL `{raw}`: {err}"),
        })
    }

    fn classify(&self, address: &ServerAddress, err: &reqwest::Error) -> ControlError {
        if err.is_timeout() {
            ControlError::Timeout {
                address: address.to_string(),
                after: self.timeout,
            }
        } else if err.is_connect() {
            ControlError::Unreachable {
                address: address.to_string(),
                reason: err.to_string(),
            }
        } else {
            ControlError::Transport {
                address: address.to_string(),
                reason: err.to_string(),
            }
        }
    }

    async fn get(
        &self,
        address: &ServerAddress,
        endpoint: &str,
    ) -> std::result::Result<Response, ControlError> {
        let url = self.url(address, endpoint)?;
        debug!(url = %url, "GET agent endpoint");
        self.client
            .get(url)
            .send()
            .await
            .map_err(|err| self.classify(address, &err))
    }

    async fn post(
        &self,
        address: &ServerAddress,
        endpoint: &str,
    ) -> std::result::Result<Response, ControlError> {
        let url = self.url(address, endpoint)?;
        debug!(url = %url, "POST agent endpoint");
        self.client
            .post(url)
            .send()
            .await
            .map_err(|err| self.classify(address, &err))
    }

    async fn expect_ok(
        &self,
        address: &ServerAddress,
        endpoint: &str,
    ) -> std::result::Result<(), ControlError> {
        let response = self.post(address, endpoint).await?;
        if response.status() == StatusCode::OK {
            Ok(())
        } else {
            Err(rejected(address, &response))
        }
    }
}

fn rejected(address: &ServerAddress, response: &Response) -> ControlError {
    ControlError::Rejected {
        address: address.to_string(),
        status: response.status().as_u16(),
    }
}

fn invalid_response(address: &ServerAddress, reason: impl ToString) -> ControlError {
    ControlError::InvalidResponse {
        address: address.to_string(),
        reason: reason.to_string(),
    }
}

/// Log bodies are either `{"log": "..."}` or plain text.
fn extract_log(body: String) -> String {
    match serde_json::from_str::<LogResponse>(&body) {
        Ok(parsed) => parsed.log,
        Err(_) => body,
    }
}

#[async_trait]
impl ServerControl for HttpAgent {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn probe(&self, address: &ServerAddress) -> std::result::Result<bool, ControlError> {
        match self.get(address, &self.endpoints.status).await {
            Ok(response) => Ok(response.status().is_success()),
            Err(ControlError::Unreachable { reason, .. }) => {
                debug!(address = %address, reason = %reason, "Probe connection refused");
                Ok(false)
            }
            Err(err) => Err(err),
        }
    }

    async fn is_running(&self, address: &ServerAddress) -> std::result::Result<bool, ControlError> {
        let response = self.get(address, &self.endpoints.is_running).await?;
        if !response.status().is_success() {
            return Err(rejected(address, &response));
        }
        let body: RunningResponse = response
            .json()
            .await
            .map_err(|err| invalid_response(address, err))?;
        Ok(body.running)
    }

    async fn start(&self, address: &ServerAddress) -> std::result::Result<(), ControlError> {
        self.expect_ok(address, &self.endpoints.start).await
    }

    async fn stop(&self, address: &ServerAddress) -> std::result::Result<(), ControlError> {
        self.expect_ok(address, &self.endpoints.stop).await
    }

    async fn fetch_log(&self, address: &ServerAddress) -> std::result::Result<String, ControlError> {
        let response = self.get(address, &self.endpoints.log).await?;
        if !response.status().is_success() {
            return Err(rejected(address, &response));
        }
        let body = response
            .text()
            .await
            .map_err(|err| invalid_response(address, err))?;
        Ok(extract_log(body))
    }
}
