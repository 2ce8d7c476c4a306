//! Document model for Elementor component JSON.
//!
//! This crate defines the plugin-agnostic types every pipeline stage works on:
//! - [`Document`] — the root envelope (`type`, `siteurl`, `elements`)
//! - [`Node`] — a section, column, container or widget with its settings bag
//! - [`SettingValue`] — the sum type behind every settings entry
//! - [`UnitValue`] / [`BoxModel`] — typed views of the two structured shapes
//!   Elementor stores inside settings
//!
//! Parsing and serialization go through `serde_json` with key order preserved,
//! so a document written back out lists settings in the order it was authored.

mod document;
mod node;
mod value;

pub use document::{DEFAULT_SITEURL, DOCUMENT_TYPE, Document};
pub use node::{ElType, Node, WidgetType};
pub use value::{BoxModel, SettingValue, Settings, UnitValue};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading or writing documents.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid document: {0}")]
    InvalidDocument(String),
}
