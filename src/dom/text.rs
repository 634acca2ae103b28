//! Rendered text heuristics
//!
//! Approximates `innerText`: non-rendered subtrees are skipped, whitespace in
//! text runs collapses, block elements start new lines and paragraphs are
//! separated by a blank line.

use super::{Document, NodeId};

/// Subtrees that never produce rendered text
pub const NON_RENDERED_TAGS: &[&str] = &[
    "head", "title", "meta", "link", "script", "style", "noscript", "template",
];

/// Elements that start and end on their own line
pub const BLOCK_TAGS: &[&str] = &[
    "address", "article", "aside", "blockquote", "body", "dd", "details", "dialog", "div",
    "dl", "dt", "fieldset", "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4",
    "h5", "h6", "header", "hr", "html", "li", "main", "nav", "ol", "pre", "section", "summary",
    "table", "tr", "ul",
];

/// Elements separated from their neighbours by a blank line
pub const PARAGRAPH_TAGS: &[&str] = &["p"];

enum Piece {
    Text { text: String, preformatted: bool },
    /// Required line breaks around a block; adjacent requirements merge
    Break(usize),
    /// A literal `<br>`
    Newline,
}

pub(super) fn render_text(doc: &Document, node: NodeId, excluded: &[&str]) -> String {
    let mut pieces = Vec::new();
    collect(doc, node, excluded, false, &mut pieces);
    assemble(pieces)
}

/// Line-break requirement of an element, by tag
pub fn break_count(tag: &str) -> usize {
    if PARAGRAPH_TAGS.contains(&tag) {
        2
    } else if BLOCK_TAGS.contains(&tag) {
        1
    } else {
        0
    }
}

/// Whether an element's subtree is skipped when rendering
pub fn is_skipped(doc: &Document, node: NodeId, excluded: &[&str]) -> bool {
    let Some(tag) = doc.tag(node) else {
        return false;
    };
    NON_RENDERED_TAGS.contains(&tag) || excluded.contains(&tag) || doc.has_attribute(node, "hidden")
}

/// Collapse whitespace runs to a single space, keeping edge spaces
pub fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_space = false;
    for c in text.chars() {
        if c.is_whitespace() {
            if !in_space {
                out.push(' ');
            }
            in_space = true;
        } else {
            out.push(c);
            in_space = false;
        }
    }
    out
}

fn collect(doc: &Document, node: NodeId, excluded: &[&str], in_pre: bool, pieces: &mut Vec<Piece>) {
    if let Some(text) = doc.text(node) {
        let text = if in_pre {
            text.to_string()
        } else {
            collapse_whitespace(text)
        };
        pieces.push(Piece::Text {
            text,
            preformatted: in_pre,
        });
        return;
    }

    if is_skipped(doc, node, excluded) {
        return;
    }

    let tag = doc.tag(node).unwrap_or_default();
    if tag == "br" {
        pieces.push(Piece::Newline);
        return;
    }

    let breaks = break_count(tag);
    if breaks > 0 {
        pieces.push(Piece::Break(breaks));
    }
    for child in doc.children(node) {
        collect(doc, *child, excluded, in_pre || tag == "pre", pieces);
    }
    if breaks > 0 {
        pieces.push(Piece::Break(breaks));
    }
}

fn assemble(pieces: Vec<Piece>) -> String {
    let mut out = String::new();
    let mut pending_breaks = 0;

    for piece in pieces {
        match piece {
            Piece::Break(n) => pending_breaks = pending_breaks.max(n),
            Piece::Newline => {
                trim_trailing_spaces(&mut out);
                out.push('\n');
                pending_breaks = 0;
            }
            Piece::Text { text, preformatted } => {
                if text.is_empty() {
                    continue;
                }
                if pending_breaks > 0 && !out.is_empty() {
                    trim_trailing_spaces(&mut out);
                    let have = out.chars().rev().take_while(|c| *c == '\n').count();
                    for _ in have..pending_breaks {
                        out.push('\n');
                    }
                }
                pending_breaks = 0;

                let at_line_start = out.is_empty() || out.ends_with('\n');
                let text = if preformatted {
                    text.as_str()
                } else if at_line_start || out.ends_with(' ') {
                    text.trim_start()
                } else {
                    text.as_str()
                };
                out.push_str(text);
            }
        }
    }

    out.lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

fn trim_trailing_spaces(out: &mut String) {
    while out.ends_with(' ') {
        out.pop();
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod text_tests;
