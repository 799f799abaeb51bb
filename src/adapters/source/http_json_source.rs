//! HTTP JSON source backed by reqwest.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;

use crate::ports::{FetchError, JsonSource};

/// Configuration for the HTTP source.
#[derive(Debug, Clone)]
pub struct HttpSourceConfig {
    /// Root URL the data paths are appended to.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl HttpSourceConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(15),
        }
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Fetches dashboard JSON from a static file host.
pub struct HttpJsonSource {
    config: HttpSourceConfig,
    client: Client,
}

impl HttpJsonSource {
    pub fn new(config: HttpSourceConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| FetchError::Transport {
                path: config.base_url.clone(),
                message: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(Self { config, client })
    }

    /// Joins the base URL and a data path with exactly one slash.
    pub fn resource_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    fn transport_error(&self, path: &str, e: reqwest::Error) -> FetchError {
        if e.is_timeout() {
            FetchError::Timeout {
                path: path.to_string(),
                timeout_secs: self.config.timeout.as_secs(),
            }
        } else if e.is_connect() {
            FetchError::Transport {
                path: path.to_string(),
                message: format!("Connection failed: {}", e),
            }
        } else {
            FetchError::Transport {
                path: path.to_string(),
                message: e.to_string(),
            }
        }
    }
}

#[async_trait]
impl JsonSource for HttpJsonSource {
    async fn fetch(&self, path: &str) -> Result<serde_json::Value, FetchError> {
        let response = self
            .client
            .get(self.resource_url(path))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| self.transport_error(path, e))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound(path.to_string()));
        }
        if !status.is_success() {
            return Err(FetchError::Http {
                status: status.as_u16(),
                path: path.to_string(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| self.transport_error(path, e))?;
        serde_json::from_str(&body).map_err(|e| FetchError::parse(path, e))
    }

    fn describe(&self) -> String {
        format!("http {}", self.config.base_url)
    }
}
