//! Tree nodes of an Elementor document.

use crate::value::{SettingValue, Settings};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Structural kind of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElType {
    Section,
    Column,
    Container,
    Widget,
}

/// The widget a leaf node renders.
///
/// Known widgets get their own variant; anything else is kept verbatim in
/// [`WidgetType::Other`] so it survives a round trip.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WidgetType {
    Heading,
    TextEditor,
    Button,
    Image,
    Icon,
    IconBox,
    ImageBox,
    IconList,
    Divider,
    Spacer,
    Video,
    Form,
    Other(String),
}

impl WidgetType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Heading => "heading",
            Self::TextEditor => "text-editor",
            Self::Button => "button",
            Self::Image => "image",
            Self::Icon => "icon",
            Self::IconBox => "icon-box",
            Self::ImageBox => "image-box",
            Self::IconList => "icon-list",
            Self::Divider => "divider",
            Self::Spacer => "spacer",
            Self::Video => "video",
            Self::Form => "form",
            Self::Other(name) => name,
        }
    }
}

impl From<String> for WidgetType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "heading" => Self::Heading,
            "text-editor" => Self::TextEditor,
            "button" => Self::Button,
            "image" => Self::Image,
            "icon" => Self::Icon,
            "icon-box" => Self::IconBox,
            "image-box" => Self::ImageBox,
            "icon-list" => Self::IconList,
            "divider" => Self::Divider,
            "spacer" => Self::Spacer,
            "video" => Self::Video,
            "form" => Self::Form,
            _ => Self::Other(s),
        }
    }
}

impl From<WidgetType> for String {
    fn from(w: WidgetType) -> Self {
        match w {
            WidgetType::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for WidgetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A section, column, container or widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "elType")]
    pub el_type: ElType,
    #[serde(rename = "widgetType", default, skip_serializing_if = "Option::is_none")]
    pub widget_type: Option<WidgetType>,
    /// Pass-through flags; absent stays absent on output.
    #[serde(rename = "isInner", default, skip_serializing_if = "Option::is_none")]
    pub is_inner: Option<bool>,
    #[serde(rename = "isLocked", default, skip_serializing_if = "Option::is_none")]
    pub is_locked: Option<bool>,
    #[serde(default, deserialize_with = "settings_or_empty_array")]
    pub settings: Settings,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elements: Option<Vec<Node>>,
    /// Node fields the pipeline does not interpret (`editSettings`, ...).
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl Node {
    /// A structural node (section, column or container) with children.
    pub fn structural(id: impl Into<String>, el_type: ElType, settings: Settings, children: Vec<Node>) -> Self {
        Self {
            id: id.into(),
            el_type,
            widget_type: None,
            is_inner: None,
            is_locked: None,
            settings,
            elements: Some(children),
            extra: IndexMap::new(),
        }
    }

    /// A leaf widget. Widgets carry an empty `elements` list, as Elementor exports them.
    pub fn widget(id: impl Into<String>, widget_type: WidgetType, settings: Settings) -> Self {
        Self {
            id: id.into(),
            el_type: ElType::Widget,
            widget_type: Some(widget_type),
            is_inner: None,
            is_locked: None,
            settings,
            elements: Some(Vec::new()),
            extra: IndexMap::new(),
        }
    }

    pub fn is_widget(&self) -> bool {
        self.el_type == ElType::Widget
    }

    /// Children of this node; empty for leaves.
    pub fn children(&self) -> &[Node] {
        self.elements.as_deref().unwrap_or_default()
    }

    /// Looks up a top-level setting.
    pub fn setting(&self, key: &str) -> Option<&SettingValue> {
        self.settings.get(key)
    }

    /// Visits this node and all descendants depth-first, parents before children.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Node)) {
        visit(self);
        for child in self.children() {
            child.walk(visit);
        }
    }
}

/// PHP serializes an empty associative array as `[]`; accept that as an empty map.
fn settings_or_empty_array<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Settings, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::Object(map) => Ok(map.into_iter().map(|(k, v)| (k, SettingValue::from(v))).collect()),
        Value::Array(items) if items.is_empty() => Ok(Settings::new()),
        Value::Null => Ok(Settings::new()),
        other => Err(serde::de::Error::custom(format!(
            "settings must be an object, got {other}"
        ))),
    }
}
