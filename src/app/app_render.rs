use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph},
};

use super::app_state::App;
use super::page_layout::PageLine;
use crate::config::ModifierKey;
use crate::dom::wrap_text;
use crate::hover::Scheduler;
use crate::tooltip::TOOLTIP_ID;
use crate::widgets::popup::{box_to_rect, clear_area};

impl<S: Scheduler> App<S> {
    pub fn render(&mut self, frame: &mut Frame) {
        let layout = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(frame.area());
        let (page_area, status_area) = (layout[0], layout[1]);

        self.set_page_area(page_area);

        self.render_page(frame, page_area);
        self.render_status_line(frame, status_area);
        self.render_tooltip(frame, page_area);
    }

    fn render_page(&self, frame: &mut Frame, area: Rect) {
        let lines: Vec<Line> = self
            .layout
            .lines()
            .iter()
            .skip(usize::from(self.scroll))
            .take(usize::from(area.height))
            .map(|line| self.styled_line(line))
            .collect();

        frame.render_widget(Paragraph::new(lines), area);
    }

    fn styled_line(&self, line: &PageLine) -> Line<'static> {
        let mut spans = Vec::new();
        let mut column = 0;
        for segment in &line.segments {
            if segment.column > column {
                spans.push(Span::raw(" ".repeat(usize::from(segment.column - column))));
            }
            let style = if self.doc.closest(segment.node, "a").is_some() {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::UNDERLINED)
            } else if matches!(self.doc.tag(segment.node), Some("h1" | "h2" | "h3")) {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            spans.push(Span::styled(segment.text.clone(), style));
            column = segment.column + segment.width();
        }
        Line::from(spans)
    }

    fn render_status_line(&self, frame: &mut Frame, area: Rect) {
        let key = match self.modifier {
            ModifierKey::Alt => "Alt",
            ModifierKey::Ctrl => "Ctrl",
            ModifierKey::Shift => "Shift",
        };
        let answers = self
            .core
            .session()
            .map_or(0, |session| session.qa_set().len());
        let title = if self.doc.title().is_empty() {
            self.doc.url()
        } else {
            self.doc.title()
        };

        let line = Line::from(vec![
            Span::styled(
                format!(" {} ", title),
                Style::default().fg(Color::Black).bg(Color::Cyan),
            ),
            Span::styled(
                format!(" {} answers | hold {} and hover | q quit", answers, key),
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }

    /// Draw the tooltip node, when displayed, at its computed position
    fn render_tooltip(&self, frame: &mut Frame, area: Rect) {
        let Some(node) = self.doc.element_by_id(TOOLTIP_ID) else {
            return;
        };
        if !self.doc.is_displayed(node) {
            return;
        }

        let position = self.doc.position(node).unwrap_or_default();
        let size = self.doc.bounding_box(node);
        let popup_area = box_to_rect(area, position, size);
        if popup_area.width < 3 || popup_area.height < 3 {
            return;
        }

        let text = self.doc.text_content(node);
        let lines: Vec<Line> = wrap_text(&text, self.doc.metrics().max_line_width)
            .into_iter()
            .map(Line::from)
            .collect();

        clear_area(frame, popup_area);
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan));
        frame.render_widget(Paragraph::new(lines).block(block), popup_area);
    }
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
