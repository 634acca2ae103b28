use std::time::Duration;

use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};

use super::app_state::App;
use super::mouse_hover::modifier_held;
use crate::dom::NodeId;
use crate::hover::{PageEvent, Scheduler};
use crate::widgets::popup::cell_to_point;

/// Longest wait for terminal input when no hover timer is pending
pub const IDLE_POLL: Duration = Duration::from_millis(250);

const WHEEL_LINES: u16 = 3;

impl<S: Scheduler> App<S> {
    /// How long the event loop may block before timers need polling
    pub fn poll_timeout(&self) -> Duration {
        self.core
            .next_timer_due()
            .map_or(IDLE_POLL, |due| due.min(IDLE_POLL))
    }

    /// Run hover timers that came due
    pub fn tick(&mut self) {
        self.core.poll_timers(&mut self.doc);
    }

    pub fn handle_event(&mut self, event: Event) {
        let scroll = self.scroll;
        match event {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            Event::FocusLost => self.core.dispatch(PageEvent::Blur, &mut self.doc),
            _ => {}
        }
        if self.scroll != scroll {
            self.retrack_pointer();
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        let page_height = self.page_area.height.max(1);

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('j') | KeyCode::Down => self.scroll_down(1),
            KeyCode::Char('k') | KeyCode::Up => self.scroll_up(1),
            KeyCode::PageDown | KeyCode::Char(' ') => self.scroll_down(page_height),
            KeyCode::PageUp => self.scroll_up(page_height),
            KeyCode::Char('g') | KeyCode::Home => self.scroll = 0,
            KeyCode::Char('G') | KeyCode::End => self.scroll = self.max_scroll(),
            _ => {}
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => self.track_pointer(mouse),
            MouseEventKind::ScrollDown => {
                self.remember_pointer(mouse);
                self.scroll_down(WHEEL_LINES);
            }
            MouseEventKind::ScrollUp => {
                self.remember_pointer(mouse);
                self.scroll_up(WHEEL_LINES);
            }
            _ => {}
        }
    }

    fn remember_pointer(&mut self, mouse: MouseEvent) {
        self.pointer = Some(MouseEvent {
            kind: MouseEventKind::Moved,
            ..mouse
        });
    }

    /// Re-hit-test the last pointer cell after the page moved under it
    fn retrack_pointer(&mut self) {
        if let Some(mouse) = self.pointer {
            self.track_pointer(mouse);
        }
    }

    fn track_pointer(&mut self, mouse: MouseEvent) {
        self.pointer = Some(mouse);
        let target = self.target_at(mouse.column, mouse.row);
        let position = cell_to_point(self.page_area, mouse.column, mouse.row);
        let modifier = modifier_held(self.modifier, mouse.modifiers);

        for event in self.tracker.track(target, position, modifier) {
            self.core.dispatch(event, &mut self.doc);
        }
    }

    /// Element under a terminal cell; blank page cells belong to `<body>`
    fn target_at(&self, column: u16, row: u16) -> Option<NodeId> {
        let area = self.page_area;
        let inside = column >= area.x
            && column < area.right()
            && row >= area.y
            && row < area.bottom();
        if !inside {
            return None;
        }

        let line = usize::from(self.scroll) + usize::from(row - area.y);
        Some(
            self.layout
                .node_at(column - area.x, line)
                .unwrap_or(self.doc.body()),
        )
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
