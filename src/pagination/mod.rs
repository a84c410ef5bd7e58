//! Pagination module
//!
//! Supports: Offset
//!
//! # Overview
//!
//! A paginator turns the cursor state into query parameters and decides,
//! from each fetched page, whether another request follows. The cursor
//! itself lives in [`PaginationState`], owned by one extraction.

mod strategies;
mod types;

pub use strategies::{OffsetPaginator, DEFAULT_LIMIT_PARAM, DEFAULT_OFFSET_PARAM};
pub use types::{NextPage, PaginationState, Paginator};
