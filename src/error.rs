//! Error types for datos-extract
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//!
//! Only [`Error::Transport`] is a classified failure. Everything else is the
//! unclassified bucket: the caller sees it, but nothing in the crate reacts
//! to it differently.

use thiserror::Error;

/// Exit status used by the binary for any failed run
pub const FAILURE_EXIT_CODE: i32 = 1;

/// The main error type for datos-extract
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Transport Errors
    // ============================================================================
    #[error("Connection to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    // ============================================================================
    // Data Processing Errors
    // ============================================================================
    #[error("Failed to decode response: {message}")]
    Decode { message: String },

    #[error("Unexpected response shape: {message}")]
    UnexpectedShape { message: String },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a transport error for a request to `url`
    pub fn transport(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Transport {
            url: url.into(),
            source,
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create an unexpected shape error
    pub fn unexpected_shape(message: impl Into<String>) -> Self {
        Self::UnexpectedShape {
            message: message.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Classify a reqwest failure raised while sending a request.
    ///
    /// Connection-level failures (DNS, refused, reset, connect timeout) and
    /// requests reqwest could not even build become [`Error::Transport`].
    /// A read timeout stays unclassified.
    pub fn from_send(url: &str, timeout_ms: u64, err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_builder() {
            return Self::transport(url, err);
        }
        if err.is_timeout() {
            return Self::Timeout { timeout_ms };
        }
        if err.is_request() {
            return Self::transport(url, err);
        }
        Self::Http(err)
    }

    /// Check if this is a connection-level failure
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    /// Process exit status for this failure
    pub fn exit_code(&self) -> i32 {
        FAILURE_EXIT_CODE
    }
}

/// Result type alias for datos-extract
pub type Result<T> = std::result::Result<T, Error>;
