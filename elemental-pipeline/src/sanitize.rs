//! Removal of empty, unit-only and internal properties from settings.
//!
//! Every function here builds a new value; inputs are never touched, so a
//! parsed document can be sanitized and stripped independently.

use crate::classify::{is_color_key, is_internal_key};
use elemental_types::{Document, Node, SettingValue, Settings};

/// Sanitizes one value. A top-level object or array that ends up empty is
/// returned as-is; only nested empties are elided.
pub fn sanitize(value: &SettingValue) -> SettingValue {
    match value {
        SettingValue::Object(map) => SettingValue::Object(sanitize_settings(map)),
        SettingValue::Array(items) => SettingValue::Array(sanitize_array(items)),
        other => other.clone(),
    }
}

/// Sanitizes a settings map key by key.
pub fn sanitize_settings(settings: &Settings) -> Settings {
    let mut out = Settings::with_capacity(settings.len());
    for (key, value) in settings {
        if is_color_key(key) {
            // "unset to inherit" color states are kept even when empty
            out.insert(key.clone(), value.clone());
            continue;
        }
        if is_internal_key(key) {
            continue;
        }
        if let Some(clean) = sanitize_entry(value) {
            out.insert(key.clone(), clean);
        }
    }
    out
}

fn sanitize_entry(value: &SettingValue) -> Option<SettingValue> {
    if value.is_empty_primitive() {
        return None;
    }
    let clean = sanitize(value);
    if clean.is_empty_container() || clean.is_unit_only() {
        None
    } else {
        Some(clean)
    }
}

fn sanitize_array(items: &[SettingValue]) -> Vec<SettingValue> {
    items
        .iter()
        .map(sanitize)
        .filter(|item| !item.is_empty_primitive())
        .collect()
}

/// Sanitizes the settings of every node, children first, keeping sibling order.
pub fn sanitize_nodes(nodes: &[Node]) -> Vec<Node> {
    nodes.iter().map(sanitize_node).collect()
}

fn sanitize_node(node: &Node) -> Node {
    Node {
        id: node.id.clone(),
        el_type: node.el_type,
        widget_type: node.widget_type.clone(),
        is_inner: node.is_inner,
        is_locked: node.is_locked,
        elements: node.elements.as_deref().map(sanitize_nodes),
        settings: sanitize_settings(&node.settings),
        extra: node.extra.clone(),
    }
}

/// Sanitizes every node of `document`; the envelope is carried through.
pub fn sanitize_document(document: &Document) -> Document {
    Document {
        doc_type: document.doc_type.clone(),
        siteurl: document.siteurl.clone(),
        elements: sanitize_nodes(&document.elements),
        extra: document.extra.clone(),
    }
}
