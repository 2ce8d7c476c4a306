use crate::node::Node;
use crate::{Error, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Value of the top-level `type` tag every Elementor document carries.
pub const DOCUMENT_TYPE: &str = "elementor";

/// `siteurl` used when a document does not carry one.
pub const DEFAULT_SITEURL: &str = "https://example.com/";

fn default_siteurl() -> String {
    DEFAULT_SITEURL.to_string()
}

/// The root of an Elementor component export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(rename = "type")]
    pub doc_type: String,
    #[serde(default = "default_siteurl")]
    pub siteurl: String,
    #[serde(default)]
    pub elements: Vec<Node>,
    /// Any other top-level keys (`version`, `title`, `page_settings`, ...).
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl Document {
    /// A bare document with the default site URL.
    pub fn new(elements: Vec<Node>) -> Self {
        Self {
            doc_type: DOCUMENT_TYPE.to_string(),
            siteurl: default_siteurl(),
            elements,
            extra: IndexMap::new(),
        }
    }

    /// Builds a document from an already-parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self> {
        if !value.is_object() {
            return Err(Error::InvalidDocument("document root must be an object".into()));
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Parses a document from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Serializes with two-space indentation.
    pub fn to_pretty_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn is_elementor(&self) -> bool {
        self.doc_type == DOCUMENT_TYPE
    }

    /// Visits every node in document order.
    pub fn walk<'a>(&'a self, mut visit: impl FnMut(&'a Node)) {
        for node in &self.elements {
            node.walk(&mut visit);
        }
    }

    /// Total node count across all depths.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        self.walk(|_| count += 1);
        count
    }

    pub fn widget_count(&self) -> usize {
        let mut count = 0;
        self.walk(|node| {
            if node.is_widget() {
                count += 1;
            }
        });
        count
    }
}
