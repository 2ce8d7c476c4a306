//! Error types for the transformation pipeline.

use serde::Serialize;
use thiserror::Error;

/// Pipeline errors. None of these escape the fail-soft entry points; they are
/// reported through [`crate::OutcomeStatus::PassedThrough`] instead.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Input text is not syntactically valid JSON.
    #[error("invalid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    /// Input parses but is not `{type: "elementor", elements: [...]}`.
    #[error("not an Elementor document")]
    NotElementorDocument,

    /// Input has the Elementor envelope but a node inside it is malformed.
    #[error("malformed document: {0}")]
    Document(#[from] elemental_types::Error),

    /// Configuration file could not be parsed.
    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),
}

impl PipelineError {
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::InvalidJson(_) => FailureKind::InvalidJson,
            Self::NotElementorDocument => FailureKind::NotElementorDocument,
            Self::Document(_) | Self::Config(_) => FailureKind::Malformed,
        }
    }
}

/// Coarse failure class callers can branch on without matching error text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    InvalidJson,
    NotElementorDocument,
    Malformed,
}

impl FailureKind {
    /// Message suitable for showing to the person who pasted the document.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidJson => "invalid JSON",
            Self::NotElementorDocument => "not an Elementor component",
            Self::Malformed => "the component could not be transformed",
        }
    }
}

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;
