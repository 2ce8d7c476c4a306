use serde::{Deserialize, Serialize};

/// Fixed look applied in wireframe mode: one font family, a blue/gray/white
/// palette and a gray placeholder image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WireframeTheme {
    pub font_family: String,
    pub heading_color: String,
    pub body_color: String,
    pub primary_background: String,
    pub primary_text: String,
    pub secondary_background: String,
    pub secondary_text: String,
    pub secondary_border: String,
    pub placeholder_image: String,
    /// Button labels containing any of these render as secondary buttons.
    pub secondary_markers: Vec<String>,
}

impl Default for WireframeTheme {
    fn default() -> Self {
        Self {
            font_family: "Inter".into(),
            heading_color: "#1F2937".into(),
            body_color: "#4B5563".into(),
            primary_background: "#0047FF".into(),
            primary_text: "#FFFFFF".into(),
            secondary_background: "#FFFFFF".into(),
            secondary_text: "#344054".into(),
            secondary_border: "#D0D5DD".into(),
            placeholder_image: "https://placehold.co/800x640/F2F4F7/4A5568?text=Image".into(),
            secondary_markers: vec!["Learn more".into(), "Saiba".into()],
        }
    }
}

impl WireframeTheme {
    pub fn is_secondary_label(&self, label: &str) -> bool {
        self.secondary_markers
            .iter()
            .any(|marker| label.contains(marker.as_str()))
    }
}
