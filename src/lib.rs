// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::needless_pass_by_value)]

//! # datos-extract
//!
//! Offset-paginated extraction of JSON records from the datos.gov.co
//! open-data API (Socrata resource endpoints).
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use datos_extract::{fetch, Result};
//! use futures::TryStreamExt;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let records: Vec<_> = fetch("https://example.org/resource/", "data.json", 1000, 0)?
//!         .try_collect()
//!         .await?;
//!     println!("{} records", records.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                       PageFetcher                        │
//! │   pages() / records() → Stream<Result<..>>   fetch_all() │
//! └──────────────────────────────────────────────────────────┘
//!                              │
//!        ┌─────────────────────┼─────────────────────┐
//!   ┌────┴─────┐        ┌──────┴──────┐        ┌─────┴─────┐
//!   │   HTTP   │        │  Paginate   │        │  Decode   │
//!   ├──────────┤        ├─────────────┤        ├───────────┤
//!   │ GET once │        │ Offset      │        │ JSON array│
//!   │ Timeout  │        │ Empty page  │        │ of objects│
//!   └──────────┘        └─────────────┘        └───────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Extraction configuration
pub mod config;

/// Run-scoped logging
pub mod logging;

/// HTTP client
pub mod http;

/// Pagination strategies
pub mod pagination;

/// Response decoders
pub mod decode;

/// The page fetcher
pub mod fetch;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use fetch::{fetch, Extraction, FetchStats, Page, PageFetcher};
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
