//! Tests for hover/extract

use super::*;

#[test]
fn test_plain_element_uses_rendered_text() {
    let mut doc = Document::new("");
    let p = doc.append_element(doc.body(), "p");
    doc.append_text(p, "  What is   the refund window? ");

    assert_eq!(hover_text(&doc, p), "What is the refund window?");
}

#[test]
fn test_link_prefers_aria_label() {
    let mut doc = Document::new("");
    let a = doc.append_element(doc.body(), "a");
    doc.set_attribute(a, "aria-label", "Refund window question");
    doc.set_attribute(a, "title", "title text");
    doc.append_text(a, "link text");

    assert_eq!(hover_text(&doc, a), "Refund window question");
}

#[test]
fn test_link_falls_back_to_title_then_text() {
    let mut doc = Document::new("");
    let a = doc.append_element(doc.body(), "a");
    doc.set_attribute(a, "aria-label", "");
    doc.set_attribute(a, "title", "title text");
    doc.append_text(a, "link text");
    assert_eq!(hover_text(&doc, a), "title text");

    doc.remove_attribute(a, "title");
    assert_eq!(hover_text(&doc, a), "link text");
}

#[test]
fn test_nested_inside_link_uses_link() {
    let mut doc = Document::new("");
    let a = doc.append_element(doc.body(), "a");
    doc.set_attribute(a, "title", "Shipping times?");
    let span = doc.append_element(a, "span");
    doc.append_text(span, "icon");

    assert_eq!(hover_text(&doc, span), "Shipping times?");
}

#[test]
fn test_unrendered_element_falls_back_to_text_content() {
    let mut doc = Document::new("");
    let svg = doc.append_element(doc.body(), "svg");
    let label = doc.append_element(svg, "text");
    doc.append_text(label, "chart label");

    assert_eq!(hover_text(&doc, label), "chart label");
}

#[test]
fn test_empty_element_yields_empty_text() {
    let mut doc = Document::new("");
    let div = doc.append_element(doc.body(), "div");

    assert_eq!(hover_text(&doc, div), "");
}

#[test]
fn test_link_without_any_text_yields_empty() {
    let mut doc = Document::new("");
    let a = doc.append_element(doc.body(), "a");
    doc.append_element(a, "img");

    assert_eq!(hover_text(&doc, a), "");
}
