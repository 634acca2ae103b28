use crate::dom::{Document, NodeId};

/// Text used to match a hovered element.
///
/// Inside a link, the link's `aria-label`, then `title`, then rendered text.
/// Otherwise the element's rendered text, or its raw text content when it
/// has no rendering. Empty values fall through to the next source.
pub fn hover_text(doc: &Document, target: NodeId) -> String {
    if let Some(link) = doc.closest(target, "a") {
        return first_non_empty([
            doc.attribute(link, "aria-label").map(str::to_string),
            doc.attribute(link, "title").map(str::to_string),
            doc.rendered_text(link),
        ]);
    }

    first_non_empty([doc.rendered_text(target), Some(doc.text_content(target))])
}

fn first_non_empty<const N: usize>(candidates: [Option<String>; N]) -> String {
    candidates
        .into_iter()
        .flatten()
        .find(|s| !s.is_empty())
        .unwrap_or_default()
}

#[cfg(test)]
#[path = "extract_tests.rs"]
mod extract_tests;
