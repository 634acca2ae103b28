//! Page text served to `QAIA_EXTRACT`

use std::sync::LazyLock;

use regex::Regex;

use crate::content::FrameMode;
use crate::dom::Document;

/// Page chrome left out of the cleaned text
pub const CHROME_TAGS: &[&str] = &["nav", "footer", "header", "aside"];

static BLANK_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

/// Text of the page for the given frame mode.
///
/// The top-level document gets the cleaned variant (chrome removed, blank line
/// runs collapsed); nested frames get the raw visible text of their body.
pub fn extract_page_text(doc: &Document, mode: FrameMode) -> String {
    match mode {
        FrameMode::FullCore => cleaned_text(doc),
        FrameMode::ExtractOnly => raw_text(doc),
    }
}

pub fn cleaned_text(doc: &Document) -> String {
    let text = doc
        .rendered_text_excluding(doc.body(), CHROME_TAGS)
        .unwrap_or_default();
    BLANK_RUNS.replace_all(&text, "\n\n").trim().to_string()
}

pub fn raw_text(doc: &Document) -> String {
    doc.rendered_text(doc.body())
        .unwrap_or_default()
        .trim()
        .to_string()
}

#[cfg(test)]
#[path = "page_text_tests.rs"]
mod page_text_tests;
