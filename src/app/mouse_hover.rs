//! Mouse hover handling
//!
//! Turns terminal mouse motion into the page events a browser would fire:
//! `mouseout` of the old element, `mouseover` of the new one, then
//! `mousemove`.

use ratatui::crossterm::event::KeyModifiers;

use crate::config::ModifierKey;
use crate::dom::{NodeId, Point};
use crate::hover::PageEvent;

/// Element currently under the mouse
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerTracker {
    hovered: Option<NodeId>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hovered(&self) -> Option<NodeId> {
        self.hovered
    }

    /// Events for the mouse now being over `target` at `position`.
    ///
    /// `None` means the mouse is outside the page: the old element gets its
    /// `mouseout` and no `mousemove` follows.
    pub fn track(&mut self, target: Option<NodeId>, position: Point, modifier: bool) -> Vec<PageEvent> {
        let mut events = Vec::new();

        if target != self.hovered {
            if self.hovered.is_some() {
                events.push(PageEvent::PointerLeave);
            }
            if let Some(target) = target {
                events.push(PageEvent::PointerEnter { target, modifier });
            }
            self.hovered = target;
        }

        if target.is_some() {
            events.push(PageEvent::PointerMove {
                x: position.x,
                y: position.y,
                modifier,
            });
        }

        events
    }

    /// Forget the hovered element, e.g. after the page was re-laid out
    pub fn clear(&mut self) {
        self.hovered = None;
    }
}

/// Whether the configured modifier is down in a mouse event's modifier flags
pub fn modifier_held(key: ModifierKey, modifiers: KeyModifiers) -> bool {
    let flag = match key {
        ModifierKey::Alt => KeyModifiers::ALT,
        ModifierKey::Ctrl => KeyModifiers::CONTROL,
        ModifierKey::Shift => KeyModifiers::SHIFT,
    };
    modifiers.contains(flag)
}

#[cfg(test)]
#[path = "mouse_hover_tests.rs"]
mod mouse_hover_tests;
