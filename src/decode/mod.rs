//! Response decoder module
//!
//! Supports: JSON arrays of objects
//!
//! # Overview
//!
//! A decoder turns a raw response body into the records of one page. A body
//! that is not JSON is a decode error; JSON of any other shape than an array
//! of objects is an unexpected-shape error.

mod decoders;
mod types;

pub use decoders::JsonArrayDecoder;
pub use types::RecordDecoder;
