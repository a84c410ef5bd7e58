//! HTTP client for paged GET requests
//!
//! Every request is attempted exactly once. The status code is reported
//! back to the caller but never turned into an error here.

use crate::config::DEFAULT_TIMEOUT_SECS;
use crate::error::{Error, Result};
use reqwest::{Client, StatusCode};
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, warn};

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Timeout applied to the connect phase and, separately, to each read
    pub timeout: Duration,
    /// Default headers for all requests
    pub default_headers: HashMap<String, String>,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            default_headers: HashMap::new(),
            user_agent: format!("datos-extract/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpClientConfig {
    /// Create a new config builder
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }
}

/// Builder for HTTP client config
#[derive(Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

/// Raw response of a page request
#[derive(Debug, Clone)]
pub struct PageResponse {
    /// HTTP status code, as received
    pub status: StatusCode,
    /// Response body text
    pub body: String,
}

/// HTTP client issuing single-attempt GET requests
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
}

impl HttpClient {
    /// Create a new HTTP client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(HttpClientConfig::default())
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        // Connect and read are bounded separately so that a connect-phase
        // timeout surfaces as a connect error.
        let client = Client::builder()
            .connect_timeout(config.timeout)
            .read_timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| Error::config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// GET `url` with the given query pairs and read the body.
    ///
    /// Connection-level failures come back as [`Error::Transport`]. A
    /// non-success status is logged and returned like any other response.
    pub async fn get_page(&self, url: &str, query: &[(String, String)]) -> Result<PageResponse> {
        let timeout_ms = self.config.timeout.as_millis() as u64;

        let mut req = self.client.get(url);
        for (key, value) in &self.config.default_headers {
            req = req.header(key.as_str(), value.as_str());
        }
        if !query.is_empty() {
            req = req.query(query);
        }

        let response = req
            .send()
            .await
            .map_err(|e| Error::from_send(url, timeout_ms, e))?;

        let status = response.status();
        if !status.is_success() {
            warn!(
                status = status.as_u16(),
                "Non-success status from {url}, processing body anyway"
            );
        }

        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                Error::Timeout { timeout_ms }
            } else {
                Error::Http(e)
            }
        })?;

        debug!("GET {url} -> {} ({} bytes)", status.as_u16(), body.len());
        Ok(PageResponse { status, body })
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
