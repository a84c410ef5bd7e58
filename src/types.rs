//! Common types used throughout datos-extract
//!
//! This module contains the record representation and the page request
//! that the fetcher rebuilds on every iteration.

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

/// A single extracted record.
///
/// Records are opaque: nothing in this crate looks inside them.
pub type Record = JsonObject;

// ============================================================================
// Page Request
// ============================================================================

/// Default number of records per page
pub const DEFAULT_LIMIT: u64 = 1000;

/// Default starting offset
pub const DEFAULT_OFFSET: u64 = 0;

/// Parameters of a single paged request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Base URL of the API (e.g. `https://www.datos.gov.co/resource/`)
    pub base_url: String,
    /// Endpoint appended to the base URL (e.g. `95qx-tzs7.json`)
    pub endpoint: String,
    /// Page size
    pub limit: u64,
    /// Cursor position
    pub offset: u64,
}

impl PageRequest {
    /// Create a request for the first page with default limit and offset
    pub fn new(base_url: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            endpoint: endpoint.into(),
            limit: DEFAULT_LIMIT,
            offset: DEFAULT_OFFSET,
        }
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

    /// Request URL: base URL and endpoint concatenated verbatim.
    ///
    /// No slash normalization happens here; `"https://host/resource"` plus
    /// `"x.json"` yields `"https://host/resourcex.json"`.
    pub fn url(&self) -> String {
        format!("{}{}", self.base_url, self.endpoint)
    }

    /// The request for the next page, or `None` once the offset no longer
    /// fits in a `u64`
    #[must_use]
    pub fn advance(&self) -> Option<Self> {
        let offset = self.offset.checked_add(self.limit)?;
        Some(Self {
            offset,
            ..self.clone()
        })
    }
}
