use elemental_cli::{ValidationReport, build_router};
use elemental_pipeline::{Config, Pipeline, PipelineSettings};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use std::sync::Arc;

const BUTTON_DOC: &str = r##"{"type":"elementor","elements":[{"id":"b","elType":"widget","widgetType":"button","settings":{"text":"Buy Now","background_color":"#FF0000","empty":""}}]}"##;

/// Spin up the HTTP server on an OS-assigned port, returning the base URL.
async fn spawn_test_server(pipeline: Pipeline) -> String {
    let app = build_router(Arc::new(pipeline));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://127.0.0.1:{}", port)
}

async fn post(url: String, body: &str) -> reqwest::Response {
    reqwest::Client::new()
        .post(url)
        .body(body.to_string())
        .send()
        .await
        .unwrap()
}

// ── clean ────────────────────────────────────────────────────────

#[tokio::test]
async fn clean_endpoint_sanitizes() {
    let base = spawn_test_server(Pipeline::default()).await;
    let resp = post(format!("{}/api/v1/clean", base), BUTTON_DOC).await;
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "transformed");
    let output: Value = serde_json::from_str(body["output"].as_str().unwrap()).unwrap();
    assert_eq!(
        output["elements"][0]["settings"],
        json!({"text": "Buy Now", "background_color": "#FF0000"})
    );
}

#[tokio::test]
async fn clean_endpoint_wireframe_query() {
    let base = spawn_test_server(Pipeline::default()).await;
    let resp = post(format!("{}/api/v1/clean?wireframe=true", base), BUTTON_DOC).await;
    let body: Value = resp.json().await.unwrap();
    let output: Value = serde_json::from_str(body["output"].as_str().unwrap()).unwrap();
    assert_eq!(output["elements"][0]["settings"]["background_color"], "#0047FF");
}

#[tokio::test]
async fn clean_endpoint_uses_configured_default_mode() {
    let config = Config {
        pipeline: PipelineSettings {
            wireframe: true,
            ..PipelineSettings::default()
        },
        ..Config::default()
    };
    let base = spawn_test_server(Pipeline::new(config)).await;
    let resp = post(format!("{}/api/v1/clean", base), BUTTON_DOC).await;
    let body: Value = resp.json().await.unwrap();
    let output: Value = serde_json::from_str(body["output"].as_str().unwrap()).unwrap();
    assert_eq!(output["elements"][0]["settings"]["button_text_color"], "#FFFFFF");
}

#[tokio::test]
async fn clean_endpoint_passes_garbage_through() {
    let base = spawn_test_server(Pipeline::default()).await;
    let resp = post(format!("{}/api/v1/clean", base), "not json at all").await;
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["output"], "not json at all");
    assert_eq!(body["status"], "passed_through");
    assert_eq!(body["kind"], "invalid_json");
}

#[tokio::test]
async fn clean_endpoint_explicit_false_overrides_config() {
    let config = Config {
        pipeline: PipelineSettings {
            wireframe: true,
            ..PipelineSettings::default()
        },
        ..Config::default()
    };
    let base = spawn_test_server(Pipeline::new(config)).await;
    let resp = post(format!("{}/api/v1/clean?wireframe=false", base), BUTTON_DOC).await;
    let body: Value = resp.json().await.unwrap();
    let output: Value = serde_json::from_str(body["output"].as_str().unwrap()).unwrap();
    assert_eq!(output["elements"][0]["settings"]["background_color"], "#FF0000");
}

#[tokio::test]
async fn clean_endpoint_standardize_query() {
    let base = spawn_test_server(Pipeline::default()).await;
    let doc = r#"{"type":"elementor","title":"Pricing","elements":[]}"#;
    let resp = post(format!("{}/api/v1/clean?standardize=true", base), doc).await;
    let body: Value = resp.json().await.unwrap();
    let output: Value = serde_json::from_str(body["output"].as_str().unwrap()).unwrap();
    assert_eq!(
        output,
        json!({"type": "elementor", "siteurl": "https://example.com/", "elements": []})
    );
}

// ── standardize ──────────────────────────────────────────────────

#[tokio::test]
async fn standardize_endpoint_drops_extra_keys() {
    let base = spawn_test_server(Pipeline::default()).await;
    let resp = post(
        format!("{}/api/v1/standardize", base),
        r#"{"type":"elementor","foo":"bar","elements":[]}"#,
    )
    .await;
    let body: Value = resp.json().await.unwrap();
    let output: Value = serde_json::from_str(body["output"].as_str().unwrap()).unwrap();
    assert_eq!(
        output,
        json!({"type": "elementor", "siteurl": "https://example.com/", "elements": []})
    );
}

// ── validate ─────────────────────────────────────────────────────

#[tokio::test]
async fn validate_endpoint_reports_shape() {
    let base = spawn_test_server(Pipeline::default()).await;

    let ok: ValidationReport = post(format!("{}/api/v1/validate", base), BUTTON_DOC)
        .await
        .json()
        .await
        .unwrap();
    assert!(ok.is_valid());

    let wrong: ValidationReport = post(format!("{}/api/v1/validate", base), r#"{"type":"page"}"#)
        .await
        .json()
        .await
        .unwrap();
    assert!(wrong.valid_json);
    assert!(!wrong.elementor_document);
    assert_eq!(wrong.message.as_deref(), Some("not an Elementor component"));
}

// ── templates ────────────────────────────────────────────────────

#[tokio::test]
async fn template_endpoint_returns_document() {
    let base = spawn_test_server(Pipeline::default()).await;
    let resp = reqwest::get(format!("{}/api/v1/templates/form", base))
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let content_type = resp.headers().get("content-type").unwrap().to_str().unwrap();
    assert!(content_type.contains("application/json"));

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["type"], "elementor");
    assert!(body["elements"].is_array());
}

#[tokio::test]
async fn unknown_template_returns_404() {
    let base = spawn_test_server(Pipeline::default()).await;
    let resp = reqwest::get(format!("{}/api/v1/templates/pricing", base))
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let base = spawn_test_server(Pipeline::default()).await;
    let resp = reqwest::get(format!("{}/api/v1/nonexistent", base))
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}

// ── ValidationReport ─────────────────────────────────────────────

#[test]
fn report_for_garbage() {
    let report = ValidationReport::of("{{");
    assert!(!report.valid_json);
    assert_eq!(report.message.as_deref(), Some("invalid JSON"));
}
