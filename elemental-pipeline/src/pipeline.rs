//! Composite text-to-text operations with a fail-soft boundary.
//!
//! `clean` and `standardize` never fail from the caller's point of view: on
//! any error the original text comes back unchanged, and the [`Outcome`]
//! status says why.

use crate::config::Config;
use crate::error::{FailureKind, PipelineError, PipelineResult};
use crate::sanitize::sanitize_document;
use crate::standardize::{standardize, standardize_value};
use crate::strip::strip_styles_with;
use crate::validate::validate;
use elemental_types::Document;
use serde::Serialize;
use tracing::{debug, warn};

/// What happened to the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum OutcomeStatus {
    /// The output differs from the input.
    Transformed,
    /// The transformation ran and produced the input text byte for byte.
    Unchanged,
    /// The transformation failed; the output is the input.
    PassedThrough { kind: FailureKind, reason: String },
}

/// Output text plus how it was produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub output: String,
    #[serde(flatten)]
    pub status: OutcomeStatus,
}

impl Outcome {
    fn completed(input: &str, output: String) -> Self {
        let status = if output == input {
            OutcomeStatus::Unchanged
        } else {
            OutcomeStatus::Transformed
        };
        Self { output, status }
    }

    fn passed_through(input: &str, error: &PipelineError) -> Self {
        Self {
            output: input.to_string(),
            status: OutcomeStatus::PassedThrough {
                kind: error.kind(),
                reason: error.to_string(),
            },
        }
    }

    /// False when the input was passed through because of a failure.
    pub fn succeeded(&self) -> bool {
        !matches!(self.status, OutcomeStatus::PassedThrough { .. })
    }

    pub fn into_output(self) -> String {
        self.output
    }
}

/// The transformation pipeline bound to one configuration.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: Config,
}

impl Pipeline {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Clean using the configured default mode.
    pub fn clean_default(&self, text: &str) -> Outcome {
        self.clean(text, self.config.pipeline.wireframe)
    }

    /// Validate, sanitize and, when `wireframe` is set, strip to a wireframe.
    pub fn clean(&self, text: &str, wireframe: bool) -> Outcome {
        match self.try_clean(text, wireframe) {
            Ok(output) => Outcome::completed(text, output),
            Err(e) => {
                warn!(error = %e, wireframe, "clean failed, returning input unchanged");
                Outcome::passed_through(text, &e)
            }
        }
    }

    /// Clean, then rebuild the minimal envelope from the cleaned document.
    pub fn clean_standardized(&self, text: &str, wireframe: bool) -> Outcome {
        let result = self
            .clean_document(text, wireframe)
            .and_then(|cleaned| Ok(standardize(&cleaned).to_pretty_json()?));
        match result {
            Ok(output) => Outcome::completed(text, output),
            Err(e) => {
                warn!(error = %e, wireframe, "clean failed, returning input unchanged");
                Outcome::passed_through(text, &e)
            }
        }
    }

    /// Rebuild the minimal `{type, siteurl, elements}` envelope.
    pub fn standardize(&self, text: &str) -> Outcome {
        match self.try_standardize(text) {
            Ok(output) => Outcome::completed(text, output),
            Err(e) => {
                warn!(error = %e, "standardize failed, returning input unchanged");
                Outcome::passed_through(text, &e)
            }
        }
    }

    /// Parse-and-check without transforming.
    pub fn parse(&self, text: &str) -> PipelineResult<Document> {
        let value = validate(text)?;
        Ok(Document::from_value(value)?)
    }

    fn try_clean(&self, text: &str, wireframe: bool) -> PipelineResult<String> {
        Ok(self.clean_document(text, wireframe)?.to_pretty_json()?)
    }

    fn clean_document(&self, text: &str, wireframe: bool) -> PipelineResult<Document> {
        let document = self.parse(text)?;
        let mut cleaned = sanitize_document(&document);
        if wireframe {
            cleaned.elements = strip_styles_with(&cleaned.elements, true, &self.config.wireframe);
        }
        debug!(
            nodes = cleaned.node_count(),
            widgets = cleaned.widget_count(),
            wireframe,
            "Cleaned document"
        );
        Ok(cleaned)
    }

    fn try_standardize(&self, text: &str) -> PipelineResult<String> {
        let value = serde_json::from_str(text).map_err(PipelineError::InvalidJson)?;
        let envelope = standardize_value(value, &self.config.pipeline.default_siteurl)?;
        debug!(elements = envelope.elements.len(), "Standardized document");
        envelope.to_pretty_json()
    }
}

/// Fail-soft clean with the stock configuration: returns `text` unchanged on failure.
pub fn clean_elementor_json(text: &str, wireframe: bool) -> String {
    Pipeline::default().clean(text, wireframe).into_output()
}

/// Fail-soft standardize with the stock configuration.
pub fn standardize_elementor_json(text: &str) -> String {
    Pipeline::default().standardize(text).into_output()
}
