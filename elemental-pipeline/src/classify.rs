//! Settings key classification.
//!
//! Every rule is a literal substring match against the key name, so
//! `button_background_color` is a color key and `_padding_mobile` is a
//! layout key.

/// Content, structure and identifier keys that survive stripping.
pub const ESSENTIAL_KEYS: &[&str] = &[
    "content_width",
    "structure",
    "_title",
    "html_tag",
    "title",
    "editor",
    "text",
    "link",
    "url",
    "selected_icon",
    "css_classes",
    "image",
    "form_fields",
    "form_name",
    "email_to",
    "button_text",
];

/// Layout keys kept by a plain strip and dropped in wireframe mode.
pub const LAYOUT_KEYS: &[&str] = &[
    "width",
    "height",
    "_element_width",
    "_element_custom_width",
    "content_position",
    "flex_",
    "gap",
    "padding",
    "margin",
    "_margin",
    "_padding",
    "size",
    "flex_direction",
    "flex_wrap",
    "space",
    "align",
    "object-fit",
];

/// Keys dropped by a strip even when they also match an allow list.
pub const UNWANTED_KEYS: &[&str] = &[
    "_motion_fx",
    "animation",
    "motion_fx",
    "background_overlay",
    "custom_css",
];

const COLOR_MARKERS: &[&str] = &["color", "_color"];

/// Prefix of Elementor's global style references.
pub const GLOBALS_PREFIX: &str = "__globals__";

fn matches_any(key: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| key.contains(needle))
}

pub fn is_color_key(key: &str) -> bool {
    matches_any(key, COLOR_MARKERS)
}

/// Internal Elementor bookkeeping (`__globals__`, `__dynamic__`, ...).
pub fn is_internal_key(key: &str) -> bool {
    key.starts_with("__")
}

pub fn is_essential_key(key: &str) -> bool {
    matches_any(key, ESSENTIAL_KEYS)
}

pub fn is_layout_key(key: &str) -> bool {
    matches_any(key, LAYOUT_KEYS)
}

pub fn is_unwanted_key(key: &str) -> bool {
    key.starts_with(GLOBALS_PREFIX) || matches_any(key, UNWANTED_KEYS)
}

/// Whether a strip keeps `key`. Exclusion is checked before any allow list.
pub fn keep_when_stripping(key: &str, wireframe: bool) -> bool {
    if is_unwanted_key(key) {
        return false;
    }
    is_essential_key(key) || (!wireframe && is_layout_key(key)) || is_color_key(key)
}
