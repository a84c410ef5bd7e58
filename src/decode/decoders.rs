//! Decoder implementations

use super::types::RecordDecoder;
use crate::error::{Error, Result};
use crate::types::Record;
use serde_json::Value;

// ============================================================================
// JSON Array Decoder
// ============================================================================

/// Decoder for bodies that are a top-level JSON array of objects
///
/// `[{"departamento": "ANTIOQUIA", ...}, ...]`
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonArrayDecoder;

impl JsonArrayDecoder {
    /// Create a new JSON array decoder
    pub fn new() -> Self {
        Self
    }
}

impl RecordDecoder for JsonArrayDecoder {
    fn decode(&self, body: &str) -> Result<Vec<Record>> {
        let value: Value = serde_json::from_str(body)
            .map_err(|e| Error::decode(format!("Failed to parse JSON: {e}")))?;

        let Value::Array(items) = value else {
            return Err(Error::unexpected_shape(format!(
                "expected a JSON array, got {}",
                kind(&value)
            )));
        };

        items
            .into_iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::Object(record) => Ok(record),
                other => Err(Error::unexpected_shape(format!(
                    "element {index} is {}, expected object",
                    kind(&other)
                ))),
            })
            .collect()
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
