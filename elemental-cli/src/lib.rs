//! Shared types and HTTP API for the Elemental command-line tool.

use axum::{
    Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
};
use elemental_pipeline::{FailureKind, Outcome, Pipeline, validate};
use elemental_templates::{TemplateKind, generate_template};
use elemental_types::Document;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Result of checking a text blob before transforming it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ValidationReport {
    pub valid_json: bool,
    pub elementor_document: bool,
    /// User-facing reason when the text is not an Elementor component.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ValidationReport {
    pub fn of(text: &str) -> Self {
        match validate(text) {
            Ok(_) => Self {
                valid_json: true,
                elementor_document: true,
                message: None,
            },
            Err(e) => {
                let kind = e.kind();
                Self {
                    valid_json: kind != FailureKind::InvalidJson,
                    elementor_document: false,
                    message: Some(kind.user_message().to_string()),
                }
            }
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid_json && self.elementor_document
    }
}

#[derive(Deserialize, Debug, Default)]
struct CleanParams {
    wireframe: Option<bool>,
    #[serde(default)]
    standardize: bool,
}

async fn clean_handler(
    State(pipeline): State<Arc<Pipeline>>,
    Query(params): Query<CleanParams>,
    body: String,
) -> Json<Outcome> {
    let wireframe = params
        .wireframe
        .unwrap_or(pipeline.config().pipeline.wireframe);
    debug!(bytes = body.len(), wireframe, standardize = params.standardize, "clean request");
    if params.standardize {
        Json(pipeline.clean_standardized(&body, wireframe))
    } else {
        Json(pipeline.clean(&body, wireframe))
    }
}

async fn standardize_handler(State(pipeline): State<Arc<Pipeline>>, body: String) -> Json<Outcome> {
    debug!(bytes = body.len(), "standardize request");
    Json(pipeline.standardize(&body))
}

async fn validate_handler(body: String) -> Json<ValidationReport> {
    Json(ValidationReport::of(&body))
}

async fn template_handler(Path(kind): Path<String>) -> Result<Json<Document>, StatusCode> {
    let kind: TemplateKind = kind.parse().map_err(|_| StatusCode::NOT_FOUND)?;
    Ok(Json(generate_template(kind)))
}

/// Build the HTTP API router around a configured pipeline.
pub fn build_router(pipeline: Arc<Pipeline>) -> Router {
    Router::new()
        .route("/api/v1/clean", post(clean_handler))
        .route("/api/v1/standardize", post(standardize_handler))
        .route("/api/v1/validate", post(validate_handler))
        .route("/api/v1/templates/{kind}", get(template_handler))
        .with_state(pipeline)
}
