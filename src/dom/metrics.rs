//! Text box measurement
//!
//! Boxes are measured on a fixed character grid: each display column is
//! `char_width` pixels and each line `line_height` pixels. Text wraps on word
//! boundaries at `max_line_width` columns.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::geometry::BoxSize;

#[derive(Debug, Clone, PartialEq)]
pub struct TextMetrics {
    pub char_width: f64,
    pub line_height: f64,
    /// Wrap width in display columns
    pub max_line_width: usize,
    /// Inner padding on the left and right edges
    pub padding_x: f64,
    /// Inner padding on the top and bottom edges
    pub padding_y: f64,
}

impl Default for TextMetrics {
    fn default() -> Self {
        Self {
            char_width: 8.0,
            line_height: 16.0,
            max_line_width: 48,
            padding_x: 8.0,
            padding_y: 16.0,
        }
    }
}

impl TextMetrics {
    /// Size of the box needed to render `text`
    pub fn measure(&self, text: &str) -> BoxSize {
        let lines = wrap_text(text, self.max_line_width);
        let columns = lines.iter().map(|l| l.width()).max().unwrap_or(0);

        BoxSize {
            width: columns as f64 * self.char_width + 2.0 * self.padding_x,
            height: lines.len() as f64 * self.line_height + 2.0 * self.padding_y,
        }
    }
}

/// Wrap text to `max_width` display columns.
///
/// Explicit newlines are kept, runs of whitespace collapse, and words wider
/// than the limit are split across lines.
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let max_width = max_width.max(1);
    let mut lines = Vec::new();

    if text.trim().is_empty() {
        return lines;
    }

    for paragraph in text.trim().split('\n') {
        let mut current = String::new();
        let mut current_width = 0;

        for word in paragraph.split_whitespace() {
            let word_width = word.width();

            if current_width > 0 && current_width + 1 + word_width > max_width {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }

            if word_width > max_width {
                for c in word.chars() {
                    let w = c.width().unwrap_or(0);
                    if current_width > 0 && current_width + w > max_width {
                        lines.push(std::mem::take(&mut current));
                        current_width = 0;
                    }
                    current.push(c);
                    current_width += w;
                }
                continue;
            }

            if current_width > 0 {
                current.push(' ');
                current_width += 1;
            }
            current.push_str(word);
            current_width += word_width;
        }

        lines.push(current);
    }

    lines
}

#[cfg(test)]
#[path = "metrics_tests.rs"]
mod metrics_tests;
