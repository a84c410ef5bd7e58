//! Pagination strategy implementations

use super::types::{NextPage, PaginationState, Paginator};

/// Default query parameter name for the page size
pub const DEFAULT_LIMIT_PARAM: &str = "limit";

/// Default query parameter name for the offset
pub const DEFAULT_OFFSET_PARAM: &str = "offset";

// ============================================================================
// Offset Pagination
// ============================================================================

/// Offset-based pagination
///
/// Sends the page size and the cursor position on every request.
/// Common patterns:
/// - `?limit=1000&offset=2000`
/// - `?$limit=1000&$offset=2000` (Socrata SoQL)
///
/// Pagination stops on the first empty page. A short page is not treated
/// as the last one, and the offset advances by the full limit whatever the
/// page size was. The cursor stays on the empty page that ended the run.
/// If the next offset would not fit in a `u64`, the current page is the
/// last one requested.
#[derive(Debug, Clone)]
pub struct OffsetPaginator {
    /// Query parameter name for limit
    pub limit_param: String,
    /// Query parameter name for offset
    pub offset_param: String,
}

impl Default for OffsetPaginator {
    fn default() -> Self {
        Self::new(DEFAULT_LIMIT_PARAM, DEFAULT_OFFSET_PARAM)
    }
}

impl OffsetPaginator {
    /// Create a new offset paginator
    pub fn new(limit_param: impl Into<String>, offset_param: impl Into<String>) -> Self {
        Self {
            limit_param: limit_param.into(),
            offset_param: offset_param.into(),
        }
    }
}

impl Paginator for OffsetPaginator {
    fn params(&self, state: &PaginationState) -> Vec<(String, String)> {
        vec![
            (self.limit_param.clone(), state.request.limit.to_string()),
            (self.offset_param.clone(), state.request.offset.to_string()),
        ]
    }

    fn process_page(&self, records_count: usize, state: &mut PaginationState) -> NextPage {
        state.add_page(records_count as u64);

        if records_count == 0 {
            state.mark_done();
            return NextPage::Done;
        }

        // no representable offset left after this page
        if !state.advance() {
            state.mark_done();
            return NextPage::Done;
        }

        NextPage::Continue {
            offset: state.offset(),
        }
    }
}
