//! Starter documents for the three component archetypes.
//!
//! Every generated [`Document`] is a fresh value with fixed ids, passes the
//! Elementor shape check, and can go straight back into the pipeline.

mod builder;
mod kind;

pub use kind::{TemplateKind, UnknownTemplateKind};

use builder::IdSequence;
use elemental_types::Document;

/// Builds the canonical document for `kind`.
pub fn generate_template(kind: TemplateKind) -> Document {
    let mut ids = IdSequence::new(kind);
    let elements = match kind {
        TemplateKind::Hero => vec![builder::hero(&mut ids)],
        TemplateKind::Features => vec![builder::features(&mut ids)],
        TemplateKind::Form => vec![builder::form(&mut ids)],
    };
    Document::new(elements)
}

/// Builds the document for `kind` and prints it with two-space indentation.
pub fn render_template(kind: TemplateKind) -> elemental_types::Result<String> {
    generate_template(kind).to_pretty_json()
}
