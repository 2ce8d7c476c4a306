//! Style stripping and wireframe injection.
//!
//! A strip keeps only the settings that carry content, structure or color
//! (plus layout outside wireframe mode). Wireframe mode then assigns a fixed
//! style per widget type so premium components can be previewed by their
//! structure alone.

use crate::classify::keep_when_stripping;
use crate::theme::WireframeTheme;
use elemental_types::{BoxModel, Node, SettingValue, Settings, UnitValue, WidgetType};

/// Strips `nodes` using the default wireframe theme.
pub fn strip_styles(nodes: &[Node], wireframe: bool) -> Vec<Node> {
    strip_styles_with(nodes, wireframe, &WireframeTheme::default())
}

/// Strips `nodes`, injecting `theme` when `wireframe` is set.
pub fn strip_styles_with(nodes: &[Node], wireframe: bool, theme: &WireframeTheme) -> Vec<Node> {
    nodes
        .iter()
        .map(|node| strip_node(node, wireframe, theme))
        .collect()
}

fn strip_node(node: &Node, wireframe: bool, theme: &WireframeTheme) -> Node {
    let mut settings = filter_settings(&node.settings, wireframe);
    if wireframe {
        if let Some(widget_type) = &node.widget_type {
            inject_wireframe_style(widget_type, &node.settings, &mut settings, theme);
        }
    }

    Node {
        id: node.id.clone(),
        el_type: node.el_type,
        widget_type: node.widget_type.clone(),
        is_inner: node.is_inner,
        is_locked: node.is_locked,
        settings,
        elements: node
            .elements
            .as_deref()
            .map(|children| strip_styles_with(children, wireframe, theme)),
        extra: node.extra.clone(),
    }
}

/// Keeps the allow-listed keys of `settings` in their original order.
pub fn filter_settings(settings: &Settings, wireframe: bool) -> Settings {
    settings
        .iter()
        .filter(|(key, _)| keep_when_stripping(key, wireframe))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Overwrites the canonical wireframe keys for `widget_type`.
///
/// `original` is the unfiltered settings map; `header_size` is read from it
/// because the filter drops it in wireframe mode.
pub fn inject_wireframe_style(
    widget_type: &WidgetType,
    original: &Settings,
    settings: &mut Settings,
    theme: &WireframeTheme,
) {
    match widget_type {
        WidgetType::Heading => style_heading(original, settings, theme),
        WidgetType::TextEditor => style_text_editor(settings, theme),
        WidgetType::Button => style_button(original, settings, theme),
        WidgetType::Image => style_image(settings, theme),
        _ => {}
    }
}

fn set(settings: &mut Settings, key: &str, value: impl Into<SettingValue>) {
    settings.insert(key.to_string(), value.into());
}

fn style_heading(original: &Settings, settings: &mut Settings, theme: &WireframeTheme) {
    set(settings, "typography_font_family", theme.font_family.as_str());
    set(settings, "typography_font_weight", "600");
    set(settings, "title_color", theme.heading_color.as_str());

    let font_size = match original.get("header_size").and_then(SettingValue::as_str) {
        Some("h1") => Some(56),
        Some("h2") => Some(48),
        _ => None,
    };
    if let Some(size) = font_size {
        set(settings, "typography_font_size", UnitValue::px(size));
        set(settings, "typography_line_height", UnitValue::custom("120%"));
    }
}

fn style_text_editor(settings: &mut Settings, theme: &WireframeTheme) {
    set(settings, "typography_font_family", theme.font_family.as_str());
    set(settings, "typography_font_weight", "400");
    set(settings, "typography_font_size", UnitValue::px(18));
    set(settings, "text_color", theme.body_color.as_str());
    set(settings, "typography_line_height", UnitValue::custom("150%"));
}

fn style_button(original: &Settings, settings: &mut Settings, theme: &WireframeTheme) {
    set(settings, "text_padding", BoxModel::symmetric("14", "24", "px"));
    set(settings, "typography_font_family", theme.font_family.as_str());
    set(settings, "typography_font_weight", "500");
    set(settings, "typography_font_size", UnitValue::px(16));

    let secondary = original
        .get("text")
        .and_then(SettingValue::as_str)
        .is_some_and(|label| theme.is_secondary_label(label));

    if secondary {
        set(settings, "background_color", theme.secondary_background.as_str());
        set(settings, "button_text_color", theme.secondary_text.as_str());
        set(settings, "border_color", theme.secondary_border.as_str());
        set(settings, "border_width", BoxModel::uniform(1, "px"));
    } else {
        set(settings, "background_color", theme.primary_background.as_str());
        set(settings, "button_text_color", theme.primary_text.as_str());
    }
    set(settings, "border_radius", BoxModel::uniform(8, "px"));
}

fn style_image(settings: &mut Settings, theme: &WireframeTheme) {
    let Some(image) = settings.get_mut("image").and_then(SettingValue::as_object_mut) else {
        return;
    };
    let has_url = image.get("url").is_some_and(|url| !url.is_empty_primitive());
    if has_url {
        image.insert("url".into(), theme.placeholder_image.as_str().into());
    }
}
