//! Extraction configuration
//!
//! The datos.gov.co source is fixed: the defaults below are the values the
//! extractor runs with when nothing overrides them. A YAML file can replace
//! any subset of fields; missing fields keep their defaults.

use crate::error::{Error, Result};
use crate::types::{PageRequest, DEFAULT_LIMIT, DEFAULT_OFFSET};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

// ============================================================================
// Constants
// ============================================================================

/// Base URL of the datos.gov.co Socrata resource API
pub const DATOS_BASE_URL: &str = "https://www.datos.gov.co/resource/";

/// Colombian departments and municipalities dataset
pub const DATOS_ENDPOINT: &str = "95qx-tzs7.json";

/// Request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 20;

/// Log file, truncated on each run
pub const DEFAULT_LOG_FILE: &str = "./filelog.log";

/// SoQL page size parameter
pub const SOQL_LIMIT_PARAM: &str = "$limit";

/// SoQL offset parameter
pub const SOQL_OFFSET_PARAM: &str = "$offset";

// ============================================================================
// Extract Config
// ============================================================================

/// Everything the extractor needs to run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractConfig {
    /// Base URL of the API
    pub base_url: String,

    /// Endpoint appended verbatim to the base URL
    pub endpoint: String,

    /// Records per page
    pub limit: u64,

    /// Starting offset
    pub offset: u64,

    /// Query parameter carrying the page size
    pub limit_param: String,

    /// Query parameter carrying the offset
    pub offset_param: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Log file path
    pub log_file: PathBuf,

    /// Socrata application token, sent as `X-App-Token` when set
    pub app_token: Option<String>,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            base_url: DATOS_BASE_URL.to_string(),
            endpoint: DATOS_ENDPOINT.to_string(),
            limit: DEFAULT_LIMIT,
            offset: DEFAULT_OFFSET,
            limit_param: SOQL_LIMIT_PARAM.to_string(),
            offset_param: SOQL_OFFSET_PARAM.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            app_token: None,
        }
    }
}

impl ExtractConfig {
    /// Create a config with the datos.gov.co defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from YAML text
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load a config from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("Failed to read config '{}': {e}", path.display()))
        })?;
        Self::from_yaml_str(&content)
    }

    /// Set the base URL
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the endpoint
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the page size
    #[must_use]
    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = limit;
        self
    }

    /// Set the starting offset
    #[must_use]
    pub fn with_offset(mut self, offset: u64) -> Self {
        self.offset = offset;
        self
    }

    /// Set the log file path
    #[must_use]
    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = path.into();
        self
    }

    /// Set the application token
    #[must_use]
    pub fn with_app_token(mut self, token: impl Into<String>) -> Self {
        self.app_token = Some(token.into());
        self
    }

    /// Request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// The first page request this config describes
    pub fn page_request(&self) -> PageRequest {
        PageRequest::new(&self.base_url, &self.endpoint)
            .with_limit(self.limit)
            .with_offset(self.offset)
    }
}
