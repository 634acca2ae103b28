//! Page layout for the terminal viewer
//!
//! Lays the body out as wrapped text lines. Every run of text remembers the
//! element it came from, so a terminal cell maps back to a hover target.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::dom::{Document, NodeId, break_count, collapse_whitespace, is_skipped};
use crate::tooltip::TOOLTIP_ID;

/// A run of text on one line, owned by a single element
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub column: u16,
    pub text: String,
    pub node: NodeId,
}

impl Segment {
    pub fn width(&self) -> u16 {
        self.text.width() as u16
    }

    fn end(&self) -> u16 {
        self.column + self.width()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageLine {
    pub segments: Vec<Segment>,
}

impl PageLine {
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Plain text of the line, gaps filled with spaces
    pub fn text(&self) -> String {
        let mut out = String::new();
        let mut column = 0;
        for segment in &self.segments {
            while column < segment.column {
                out.push(' ');
                column += 1;
            }
            out.push_str(&segment.text);
            column = segment.end();
        }
        out
    }
}

enum Item {
    Word {
        text: String,
        node: NodeId,
        space_before: bool,
    },
    Break(usize),
    Newline,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageLayout {
    lines: Vec<PageLine>,
    width: u16,
}

impl PageLayout {
    /// Lay out the document body `width` columns wide
    pub fn build(doc: &Document, width: u16) -> Self {
        let mut items = Vec::new();
        let mut pending_space = false;
        collect(doc, doc.body(), false, &mut pending_space, &mut items);

        let mut builder = LineBuilder::new(width.max(1));
        for item in items {
            builder.push(item);
        }
        Self {
            lines: builder.finish(),
            width,
        }
    }

    pub fn lines(&self) -> &[PageLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    /// Element whose text covers `column` on layout line `line`
    pub fn node_at(&self, column: u16, line: usize) -> Option<NodeId> {
        self.lines
            .get(line)?
            .segments
            .iter()
            .find(|s| column >= s.column && column < s.end())
            .map(|s| s.node)
    }
}

fn collect(
    doc: &Document,
    node: NodeId,
    in_pre: bool,
    pending_space: &mut bool,
    items: &mut Vec<Item>,
) {
    if let Some(text) = doc.text(node) {
        let Some(owner) = doc.parent(node) else {
            return;
        };
        if in_pre {
            collect_preformatted(text, owner, items);
        } else {
            collect_words(text, owner, pending_space, items);
        }
        return;
    }

    if is_skipped(doc, node, &[]) || doc.attribute(node, "id") == Some(TOOLTIP_ID) {
        return;
    }

    let tag = doc.tag(node).unwrap_or_default();
    if tag == "br" {
        items.push(Item::Newline);
        *pending_space = false;
        return;
    }

    let breaks = break_count(tag);
    if breaks > 0 {
        items.push(Item::Break(breaks));
        *pending_space = false;
    }
    for child in doc.children(node) {
        collect(doc, *child, in_pre || tag == "pre", pending_space, items);
    }
    if breaks > 0 {
        items.push(Item::Break(breaks));
        *pending_space = false;
    }
}

fn collect_words(text: &str, owner: NodeId, pending_space: &mut bool, items: &mut Vec<Item>) {
    let collapsed = collapse_whitespace(text);
    let mut space_before = *pending_space || collapsed.starts_with(' ');
    for word in collapsed.split(' ').filter(|w| !w.is_empty()) {
        items.push(Item::Word {
            text: word.to_string(),
            node: owner,
            space_before,
        });
        space_before = true;
    }
    *pending_space = if collapsed.trim().is_empty() {
        *pending_space || !collapsed.is_empty()
    } else {
        collapsed.ends_with(' ')
    };
}

fn collect_preformatted(text: &str, owner: NodeId, items: &mut Vec<Item>) {
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            items.push(Item::Newline);
        }
        if !line.is_empty() {
            items.push(Item::Word {
                text: line.replace('\t', "    "),
                node: owner,
                space_before: false,
            });
        }
    }
}

struct LineBuilder {
    width: u16,
    lines: Vec<PageLine>,
    current: PageLine,
    column: u16,
    pending_breaks: usize,
}

impl LineBuilder {
    fn new(width: u16) -> Self {
        Self {
            width,
            lines: Vec::new(),
            current: PageLine::default(),
            column: 0,
            pending_breaks: 0,
        }
    }

    fn push(&mut self, item: Item) {
        match item {
            Item::Break(n) => self.pending_breaks = self.pending_breaks.max(n),
            Item::Newline => {
                self.end_line();
                self.pending_breaks = 0;
            }
            Item::Word {
                text,
                node,
                space_before,
            } => {
                self.apply_breaks();
                self.place_word(text, node, space_before);
            }
        }
    }

    fn apply_breaks(&mut self) {
        if self.pending_breaks == 0 {
            return;
        }
        if self.lines.is_empty() && self.current.is_empty() {
            self.pending_breaks = 0;
            return;
        }
        if !self.current.is_empty() {
            self.end_line();
        }
        let blank = self.lines.iter().rev().take_while(|l| l.is_empty()).count();
        for _ in blank..self.pending_breaks - 1 {
            self.lines.push(PageLine::default());
        }
        self.pending_breaks = 0;
    }

    fn place_word(&mut self, text: String, node: NodeId, space_before: bool) {
        let word_width = text.width() as u16;
        let mut gap = u16::from(space_before && self.column > 0);

        if self.column > 0 && self.column + gap + word_width > self.width {
            self.end_line();
            gap = 0;
        }

        if word_width > self.width {
            for c in text.chars() {
                let w = c.width().unwrap_or(0) as u16;
                if self.column > 0 && self.column + w > self.width {
                    self.end_line();
                }
                self.append(c.to_string(), node, 0);
            }
            return;
        }

        self.append(text, node, gap);
    }

    fn append(&mut self, text: String, node: NodeId, gap: u16) {
        let width = text.width() as u16;
        let column = self.column + gap;

        match self.current.segments.last_mut() {
            Some(last) if last.node == node && last.end() == self.column => {
                for _ in 0..gap {
                    last.text.push(' ');
                }
                last.text.push_str(&text);
            }
            _ => self.current.segments.push(Segment { column, text, node }),
        }
        self.column = column + width;
    }

    fn end_line(&mut self) {
        self.lines.push(std::mem::take(&mut self.current));
        self.column = 0;
    }

    fn finish(mut self) -> Vec<PageLine> {
        if !self.current.is_empty() {
            self.end_line();
        }
        while self.lines.last().is_some_and(PageLine::is_empty) {
            self.lines.pop();
        }
        self.lines
    }
}

#[cfg(test)]
#[path = "page_layout_tests.rs"]
mod page_layout_tests;
