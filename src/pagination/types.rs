//! Pagination types and traits
//!
//! Defines the cursor state and the trait a pagination strategy implements.

use crate::types::PageRequest;

/// Result of processing a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextPage {
    /// More pages may follow; the next request starts at this offset
    Continue {
        /// Offset of the next request
        offset: u64,
    },
    /// No more pages
    Done,
}

impl NextPage {
    /// Check if this is a done result
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }

    /// Check if this is a continue result
    pub fn is_continue(&self) -> bool {
        matches!(self, Self::Continue { .. })
    }
}

/// Tracks pagination state during one extraction.
///
/// Owned by a single fetch; never persisted or shared.
#[derive(Debug, Clone)]
pub struct PaginationState {
    /// Request for the page about to be fetched
    pub request: PageRequest,
    /// Pages processed so far
    pub pages: u64,
    /// Total records fetched so far
    pub total_fetched: u64,
    /// Is pagination complete?
    pub done: bool,
}

impl PaginationState {
    /// Start paginating from `request`
    pub fn new(request: PageRequest) -> Self {
        Self {
            request,
            pages: 0,
            total_fetched: 0,
            done: false,
        }
    }

    /// Current offset
    pub fn offset(&self) -> u64 {
        self.request.offset
    }

    /// Mark pagination as complete
    pub fn mark_done(&mut self) {
        self.done = true;
    }

    /// Move the cursor forward by one page.
    ///
    /// Returns `false`, leaving the cursor in place, when the next offset
    /// would overflow.
    pub fn advance(&mut self) -> bool {
        match self.request.advance() {
            Some(next) => {
                self.request = next;
                true
            }
            None => false,
        }
    }

    /// Record a processed page
    pub fn add_page(&mut self, records: u64) {
        self.pages += 1;
        self.total_fetched += records;
    }
}

/// Core trait for pagination strategies
pub trait Paginator: Send + Sync {
    /// Query parameters for the request described by `state`
    fn params(&self, state: &PaginationState) -> Vec<(String, String)>;

    /// Account for a fetched page and decide whether another follows
    fn process_page(&self, records_count: usize, state: &mut PaginationState) -> NextPage;
}
