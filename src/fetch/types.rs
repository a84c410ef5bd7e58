//! Fetch output types

use crate::types::Record;

/// One non-empty page as returned by the server
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// Offset the page was requested at
    pub offset: u64,
    /// HTTP status the page arrived with
    pub status: u16,
    /// Records in server order
    pub records: Vec<Record>,
}

impl Page {
    /// Number of records in the page
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the page has no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Statistics from a fetch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchStats {
    /// Non-empty pages received
    pub pages_fetched: usize,
    /// Records received
    pub records_fetched: usize,
    /// Duration in milliseconds
    pub duration_ms: u64,
}

impl FetchStats {
    /// Create new stats
    pub fn new() -> Self {
        Self::default()
    }

    /// Account for a page
    pub fn add_page(&mut self, records: usize) {
        self.pages_fetched += 1;
        self.records_fetched += records;
    }

    /// Set duration
    pub fn set_duration(&mut self, ms: u64) {
        self.duration_ms = ms;
    }
}

/// Every record of a drained fetch
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    /// All records, page after page
    pub records: Vec<Record>,
    /// Fetch statistics
    pub stats: FetchStats,
}
