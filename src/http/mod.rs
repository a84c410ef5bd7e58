//! HTTP client module
//!
//! Thin wrapper over reqwest for the paged GET requests the fetcher issues.
//!
//! # Behavior
//!
//! - **Single attempt**: no retries, no backoff
//! - **Fixed timeout**: 20 seconds to connect and 20 per read, unless configured otherwise
//! - **Status passthrough**: non-success statuses are logged, not rejected

mod client;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, PageResponse};

#[cfg(test)]
mod tests;
