use elemental_types::{Document, ElType};
use serde::Serialize;
use std::collections::BTreeMap;

/// Label used for widgets that carry no `widgetType`.
pub const UNKNOWN_WIDGET: &str = "unknown";

/// Structural shape of a document: how many of each node kind it holds.
/// This is what a wireframe preview reveals about a premium component.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StructureSummary {
    pub sections: usize,
    pub columns: usize,
    pub containers: usize,
    pub widgets: BTreeMap<String, usize>,
    pub max_depth: usize,
}

impl StructureSummary {
    pub fn of(document: &Document) -> Self {
        let mut summary = Self::default();
        for node in &document.elements {
            summary.visit(node, 1);
        }
        summary
    }

    fn visit(&mut self, node: &elemental_types::Node, depth: usize) {
        self.max_depth = self.max_depth.max(depth);
        match node.el_type {
            ElType::Section => self.sections += 1,
            ElType::Column => self.columns += 1,
            ElType::Container => self.containers += 1,
            ElType::Widget => {
                let name = node
                    .widget_type
                    .as_ref()
                    .map_or(UNKNOWN_WIDGET, |w| w.as_str());
                *self.widgets.entry(name.to_string()).or_default() += 1;
            }
        }
        for child in node.children() {
            self.visit(child, depth + 1);
        }
    }

    pub fn widget_total(&self) -> usize {
        self.widgets.values().sum()
    }
}
