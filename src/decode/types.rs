//! Decoder types and traits

use crate::error::Result;
use crate::types::Record;

/// Turns a response body into the records of one page
pub trait RecordDecoder: Send + Sync {
    /// Decode records from a response body, preserving server order
    fn decode(&self, body: &str) -> Result<Vec<Record>>;
}
