//! Syntactic and structural checks run before any transformation.

use crate::error::{PipelineError, PipelineResult};
use elemental_types::DOCUMENT_TYPE;
use serde_json::Value;

/// True iff `text` parses as JSON.
pub fn is_valid_json(text: &str) -> bool {
    serde_json::from_str::<serde::de::IgnoredAny>(text).is_ok()
}

/// True iff `value` is an object tagged `type: "elementor"` with an `elements` array.
pub fn is_valid_elementor_document(value: &Value) -> bool {
    value.get("type").and_then(Value::as_str) == Some(DOCUMENT_TYPE)
        && value.get("elements").is_some_and(Value::is_array)
}

/// Parses `text` and checks the Elementor envelope, returning the parsed value.
pub fn validate(text: &str) -> PipelineResult<Value> {
    let value: Value = serde_json::from_str(text).map_err(PipelineError::InvalidJson)?;
    if !is_valid_elementor_document(&value) {
        return Err(PipelineError::NotElementorDocument);
    }
    Ok(value)
}
