use elemental_pipeline::{
    Config, FailureKind, OutcomeStatus, Pipeline, PipelineSettings, clean_elementor_json, standardize,
    standardize_elementor_json,
};
use elemental_types::Document;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

const BASIC: &str = r#"{"type":"elementor","elements":[{"id":"1","elType":"widget","widgetType":"heading","settings":{"title":"Hi","__globals__title":"x","empty_prop":""}}]}"#;

fn parse(text: &str) -> Value {
    serde_json::from_str(text).unwrap()
}

// ── clean ────────────────────────────────────────────────────────

#[test]
fn basic_clean() {
    let out = parse(&clean_elementor_json(BASIC, false));
    assert_eq!(out["elements"][0]["settings"], json!({"title": "Hi"}));
    assert_eq!(out["type"], "elementor");
}

#[test]
fn clean_output_is_pretty_printed() {
    let out = clean_elementor_json(BASIC, false);
    assert!(out.starts_with("{\n  \"type\": \"elementor\""));
}

#[test]
fn clean_passes_garbage_through() {
    assert_eq!(clean_elementor_json("not json at all", false), "not json at all");
    assert_eq!(clean_elementor_json("not json at all", true), "not json at all");
}

#[test]
fn clean_reports_invalid_json() {
    let outcome = Pipeline::default().clean("{oops", false);
    assert_eq!(outcome.output, "{oops");
    assert!(!outcome.succeeded());
    match outcome.status {
        OutcomeStatus::PassedThrough { kind, .. } => assert_eq!(kind, FailureKind::InvalidJson),
        other => panic!("unexpected status {other:?}"),
    }
}

#[test]
fn clean_reports_wrong_shape() {
    let input = r#"{"type":"page","elements":[]}"#;
    let outcome = Pipeline::default().clean(input, false);
    assert_eq!(outcome.output, input);
    assert_eq!(
        outcome.status,
        OutcomeStatus::PassedThrough {
            kind: FailureKind::NotElementorDocument,
            reason: "not an Elementor document".into(),
        }
    );
}

#[test]
fn clean_reports_malformed_node() {
    let input = r#"{"type":"elementor","elements":[{"id":"1","elType":"slider","settings":{}}]}"#;
    let outcome = Pipeline::default().clean(input, false);
    assert_eq!(outcome.output, input);
    assert!(matches!(
        outcome.status,
        OutcomeStatus::PassedThrough { kind: FailureKind::Malformed, .. }
    ));
}

#[test]
fn clean_of_clean_output_is_unchanged() {
    let pipeline = Pipeline::default();
    let first = pipeline.clean(BASIC, false);
    assert_eq!(first.status, OutcomeStatus::Transformed);

    let second = pipeline.clean(&first.output, false);
    assert_eq!(second.status, OutcomeStatus::Unchanged);
    assert_eq!(second.output, first.output);
}

#[test]
fn clean_wireframe_injects_styles() {
    let input = json!({
        "type": "elementor",
        "siteurl": "https://shop.test/",
        "elements": [{
            "id": "c", "elType": "container", "settings": {"flex_gap": {"unit": "px", "size": 10}},
            "elements": [{
                "id": "b", "elType": "widget", "widgetType": "button",
                "settings": {"text": "Buy Now", "background_color": "#AA0000", "_animation": "bounce"},
                "elements": []
            }]
        }]
    })
    .to_string();

    let out = parse(&clean_elementor_json(&input, true));
    assert_eq!(out["siteurl"], "https://shop.test/");
    assert_eq!(out["elements"][0]["settings"], json!({}));
    let button = &out["elements"][0]["elements"][0]["settings"];
    assert_eq!(button["background_color"], "#0047FF");
    assert_eq!(button["button_text_color"], "#FFFFFF");
    assert!(button.get("_animation").is_none());
}

#[test]
fn clean_keeps_extra_top_level_keys() {
    let input = r#"{"type":"elementor","version":"0.4","elements":[]}"#;
    let out = parse(&clean_elementor_json(input, false));
    assert_eq!(out["version"], "0.4");
}

#[test]
fn clean_default_follows_config_mode() {
    let config = Config {
        pipeline: PipelineSettings {
            wireframe: true,
            ..PipelineSettings::default()
        },
        ..Config::default()
    };
    let input = r#"{"type":"elementor","elements":[{"id":"h","elType":"widget","widgetType":"heading","settings":{"title":"T"}}]}"#;
    let out = parse(&Pipeline::new(config).clean_default(input).output);
    assert_eq!(out["elements"][0]["settings"]["typography_font_family"], "Inter");
}

// ── standardize ──────────────────────────────────────────────────

#[test]
fn standardize_drops_extra_keys() {
    let input = r#"{"type":"elementor","siteurl":"https://a.test/","foo":"bar","version":"0.4","elements":[]}"#;
    let out = parse(&standardize_elementor_json(input));
    assert_eq!(
        out,
        json!({"type": "elementor", "siteurl": "https://a.test/", "elements": []})
    );
}

#[test]
fn standardize_fills_defaults() {
    let out = parse(&standardize_elementor_json(r#"{"foo":"bar"}"#));
    assert_eq!(
        out,
        json!({"type": "elementor", "siteurl": "https://example.com/", "elements": []})
    );
}

#[test]
fn standardize_uses_configured_siteurl() {
    let config = Config {
        pipeline: PipelineSettings {
            default_siteurl: "https://components.test/".into(),
            ..PipelineSettings::default()
        },
        ..Config::default()
    };
    let outcome = Pipeline::new(config).standardize(r#"{"type":"elementor","elements":[]}"#);
    assert_eq!(parse(&outcome.output)["siteurl"], "https://components.test/");
}

#[test]
fn standardize_keeps_elements_in_order() {
    let input = json!({
        "type": "whatever",
        "elements": [
            {"id": "1", "elType": "section", "settings": {}, "elements": []},
            {"id": "2", "elType": "container", "settings": {}, "elements": []}
        ]
    })
    .to_string();
    let out = parse(&standardize_elementor_json(&input));
    assert_eq!(out["type"], "elementor");
    assert_eq!(out["elements"][0]["id"], "1");
    assert_eq!(out["elements"][1]["id"], "2");
}

#[test]
fn standardize_passes_through_non_objects() {
    assert_eq!(standardize_elementor_json("[1,2,3]"), "[1,2,3]");
    assert_eq!(standardize_elementor_json("nope"), "nope");
}

#[test]
fn standardize_keeps_unmodelled_nodes_verbatim() {
    let elements = json!([
        {"id": "a", "elType": "e-flexbox", "settings": {}},
        {"id": "b", "elType": "widget", "widgetType": "heading", "settings": []}
    ]);
    let input = json!({"type": "elementor", "foo": "bar", "elements": elements.clone()}).to_string();

    let outcome = Pipeline::default().standardize(&input);
    assert_eq!(outcome.status, OutcomeStatus::Transformed);
    let out = parse(&outcome.output);
    assert!(out.get("foo").is_none());
    assert_eq!(out["elements"], elements);
}

#[test]
fn standardize_replaces_non_array_elements() {
    let out = parse(&standardize_elementor_json(r#"{"type":"elementor","elements":{"a":1}}"#));
    assert_eq!(out["elements"], json!([]));
}

#[test]
fn typed_standardize_drops_extra_and_keeps_siteurl() {
    let doc = Document::from_json(
        r#"{"type":"elementor","siteurl":"https://a.test/","version":"0.4","title":"x","elements":[{"id":"1","elType":"container","settings":{},"elements":[]}]}"#,
    )
    .unwrap();
    let out = standardize(&doc);
    assert!(out.extra.is_empty());
    assert_eq!(out.siteurl, "https://a.test/");
    assert_eq!(out.elements, doc.elements);
    assert_eq!(
        out.to_value().unwrap(),
        json!({
            "type": "elementor",
            "siteurl": "https://a.test/",
            "elements": [{"id": "1", "elType": "container", "settings": {}, "elements": []}]
        })
    );
}

#[test]
fn clean_standardized_drops_extra_keys() {
    let input = r#"{"type":"elementor","version":"0.4","elements":[{"id":"1","elType":"widget","widgetType":"heading","settings":{"title":"Hi","empty":""}}]}"#;
    let outcome = Pipeline::default().clean_standardized(input, false);
    let out = parse(&outcome.output);
    assert_eq!(
        out,
        json!({
            "type": "elementor",
            "siteurl": "https://example.com/",
            "elements": [{"id": "1", "elType": "widget", "widgetType": "heading", "settings": {"title": "Hi"}}]
        })
    );
}

#[test]
fn clean_does_not_invent_node_flags() {
    let out = parse(&clean_elementor_json(BASIC, false));
    assert!(out["elements"][0].get("isInner").is_none());
    assert!(out["elements"][0].get("isLocked").is_none());
}

// ── parse ────────────────────────────────────────────────────────

#[test]
fn parse_returns_typed_document() {
    let doc = Pipeline::default().parse(BASIC).unwrap();
    assert_eq!(doc.elements.len(), 1);
}
