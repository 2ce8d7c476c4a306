//! Transformation pipeline for Elementor component documents.
//!
//! Stages, each a pure function over [`elemental_types`]:
//! - [`validate`] — JSON syntax and `{type: "elementor", elements: [...]}` shape
//! - [`sanitize`] — drop empty, unit-only and `__`-internal settings, keep colors
//! - [`strip`] — keep content/layout/color settings, optionally inject the
//!   wireframe look
//! - [`standardize`] — rebuild the three-key envelope
//!
//! [`Pipeline`] composes them behind a fail-soft boundary: the text-level
//! operations hand back the original input when anything goes wrong.

pub mod classify;
mod config;
mod error;
mod pipeline;
pub mod sanitize;
pub mod standardize;
pub mod strip;
mod summary;
mod theme;
pub mod validate;

pub use config::{CONFIG_FILE_NAME, Config, PipelineSettings, ServerSettings};
pub use error::{FailureKind, PipelineError, PipelineResult};
pub use pipeline::{Outcome, OutcomeStatus, Pipeline, clean_elementor_json, standardize_elementor_json};
pub use sanitize::{sanitize, sanitize_document, sanitize_nodes, sanitize_settings};
pub use standardize::{Envelope, standardize, standardize_value};
pub use strip::{strip_styles, strip_styles_with};
pub use summary::{StructureSummary, UNKNOWN_WIDGET};
pub use theme::WireframeTheme;
pub use validate::{is_valid_elementor_document, is_valid_json, validate};
