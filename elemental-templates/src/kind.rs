use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The archetypes a starter template can be generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    Hero,
    Features,
    Form,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 3] = [Self::Hero, Self::Features, Self::Form];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Features => "features",
            Self::Form => "form",
        }
    }

    /// Seed for the id sequence, so each archetype gets its own id range.
    pub(crate) fn id_prefix(&self) -> u32 {
        match self {
            Self::Hero => 0xa,
            Self::Features => 0xb,
            Self::Form => 0xc,
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known archetype.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown template kind {0:?} (expected hero, features or form)")]
pub struct UnknownTemplateKind(pub String);

impl FromStr for TemplateKind {
    type Err = UnknownTemplateKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hero" => Ok(Self::Hero),
            "features" => Ok(Self::Features),
            "form" => Ok(Self::Form),
            other => Err(UnknownTemplateKind(other.to_string())),
        }
    }
}
