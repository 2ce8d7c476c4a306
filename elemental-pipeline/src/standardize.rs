//! Canonical document envelope.

use crate::error::{PipelineError, PipelineResult};
use elemental_types::{DOCUMENT_TYPE, Document};
use serde::Serialize;
use serde_json::Value;

/// Rebuilds `document` as exactly `{type, siteurl, elements}`.
pub fn standardize(document: &Document) -> Document {
    Document {
        doc_type: DOCUMENT_TYPE.to_string(),
        siteurl: document.siteurl.clone(),
        elements: document.elements.clone(),
        extra: Default::default(),
    }
}

/// The three-key envelope over untyped elements.
///
/// Elements are kept as the JSON they arrived as, so node kinds and fields
/// the typed model does not know come back untouched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope {
    #[serde(rename = "type")]
    pub doc_type: String,
    pub siteurl: String,
    pub elements: Vec<Value>,
}

impl Envelope {
    /// Serializes with two-space indentation.
    pub fn to_pretty_json(&self) -> PipelineResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| PipelineError::Document(elemental_types::Error::from(e)))
    }
}

/// Builds the envelope from an arbitrary parsed JSON object.
///
/// A missing or non-string `siteurl` becomes `default_siteurl`, a missing or
/// non-array `elements` becomes `[]`, and every other top-level key is dropped.
/// The root itself must be an object.
pub fn standardize_value(value: Value, default_siteurl: &str) -> PipelineResult<Envelope> {
    let Value::Object(mut root) = value else {
        return Err(PipelineError::NotElementorDocument);
    };

    let siteurl = match root.remove("siteurl") {
        Some(Value::String(url)) => url,
        _ => default_siteurl.to_string(),
    };
    let elements = match root.remove("elements") {
        Some(Value::Array(items)) => items,
        _ => Vec::new(),
    };

    Ok(Envelope {
        doc_type: DOCUMENT_TYPE.to_string(),
        siteurl,
        elements,
    })
}
