//! HTML import
//!
//! Builds a [`Document`] from markup using `scraper` (html5ever), so every
//! page gets the same `<html>`/`<head>`/`<body>` skeleton a browser would.

use scraper::{ElementRef, Html};

use super::{Document, NodeId};

impl Document {
    /// Parse an HTML page into a top-level document
    pub fn parse_html(html: &str, url: impl Into<String>) -> Self {
        let parsed = Html::parse_document(html);
        let mut doc = Document::new(url);

        let root = parsed.root_element();
        let html_node = doc.root();
        copy_attributes(&mut doc, html_node, root);

        for child in root.children() {
            let Some(element) = ElementRef::wrap(child) else {
                continue;
            };
            let target = match element.value().name() {
                "head" => doc.head(),
                _ => doc.body(),
            };
            copy_attributes(&mut doc, target, element);
            import_children(&mut doc, target, element);
        }

        let title = doc
            .elements_by_tag("title")
            .first()
            .map(|t| doc.text_content(*t).trim().to_string())
            .unwrap_or_default();
        doc.set_title(title);

        doc
    }
}

fn import_children(doc: &mut Document, parent: NodeId, element: ElementRef<'_>) {
    for child in element.children() {
        if let Some(child_element) = ElementRef::wrap(child) {
            let node = doc.append_element(parent, child_element.value().name());
            copy_attributes(doc, node, child_element);
            import_children(doc, node, child_element);
        } else if let Some(text) = child.value().as_text() {
            doc.append_text(parent, &text.text);
        }
    }
}

fn copy_attributes(doc: &mut Document, node: NodeId, element: ElementRef<'_>) {
    for (name, value) in element.value().attrs() {
        doc.set_attribute(node, name, value);
    }
}

#[cfg(test)]
#[path = "html_tests.rs"]
mod html_tests;
