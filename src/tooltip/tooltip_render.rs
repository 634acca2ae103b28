use super::placement::place_tooltip;
use crate::config::TooltipConfig;
use crate::dom::{Document, NodeId, Point};

/// Stable element id of the tooltip node
pub const TOOLTIP_ID: &str = "qaia-tooltip";

/// Shows and hides the singleton tooltip node
#[derive(Debug, Clone, Default)]
pub struct TooltipRenderer {
    config: TooltipConfig,
}

impl TooltipRenderer {
    pub fn new(config: TooltipConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TooltipConfig {
        &self.config
    }

    /// Show `text` next to `pointer`. Empty text hides the tooltip instead.
    ///
    /// The box size is only known once the node is visible with its content,
    /// so the node is shown at the origin first, measured, then moved.
    pub fn show(&self, doc: &mut Document, pointer: Point, text: &str) {
        if text.is_empty() {
            self.hide(doc);
            return;
        }

        let node = ensure_tooltip(doc);
        doc.set_text_content(node, text);
        doc.remove_attribute(node, "hidden");
        doc.set_position(node, Point::default());

        let size = doc.bounding_box(node);
        let position = place_tooltip(pointer, size, doc.viewport(), &self.config);
        doc.set_position(node, position);
    }

    /// Hide the tooltip; content and position stay until the next `show`
    pub fn hide(&self, doc: &mut Document) {
        let Some(node) = doc.element_by_id(TOOLTIP_ID) else {
            return;
        };
        doc.set_attribute(node, "hidden", "");
    }
}

/// Find the tooltip node, creating it under `<body>` if the page has none
pub fn ensure_tooltip(doc: &mut Document) -> NodeId {
    if let Some(existing) = doc.element_by_id(TOOLTIP_ID) {
        return existing;
    }

    let node = doc.create_element("div");
    doc.set_attribute(node, "id", TOOLTIP_ID);
    doc.set_attribute(node, "role", "tooltip");
    doc.set_attribute(node, "hidden", "");
    let body = doc.body();
    doc.append_child(body, node);
    log::debug!("Created tooltip node");
    node
}

pub fn is_tooltip_visible(doc: &Document) -> bool {
    doc.element_by_id(TOOLTIP_ID)
        .is_some_and(|node| doc.is_displayed(node))
}

/// Text of the tooltip while it is visible
pub fn tooltip_text(doc: &Document) -> Option<String> {
    let node = doc.element_by_id(TOOLTIP_ID)?;
    doc.is_displayed(node).then(|| doc.text_content(node))
}

#[cfg(test)]
#[path = "tooltip_render_tests.rs"]
mod tooltip_render_tests;
