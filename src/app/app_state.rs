use ratatui::crossterm::event::MouseEvent;
use ratatui::layout::Rect;

use super::mouse_hover::PointerTracker;
use super::page_layout::PageLayout;
use crate::bridge::InboundMessage;
use crate::config::{Config, ModifierKey};
use crate::content::ContentCore;
use crate::dom::Document;
use crate::hover::{InstantScheduler, Scheduler};
use crate::qa::QaPair;
use crate::widgets::popup::area_viewport;

/// Terminal page viewer state
pub struct App<S: Scheduler = InstantScheduler> {
    pub doc: Document,
    pub core: ContentCore<S>,
    pub layout: PageLayout,
    pub scroll: u16,
    pub tracker: PointerTracker,
    /// Last mouse report, replayed when the page scrolls under a still pointer
    pub pointer: Option<MouseEvent>,
    pub modifier: ModifierKey,
    /// Where the page was last drawn; mouse cells are relative to it
    pub page_area: Rect,
    pub should_quit: bool,
}

impl App<InstantScheduler> {
    pub fn new(doc: Document, config: &Config) -> Self {
        Self::with_scheduler(doc, config, InstantScheduler::new())
    }
}

impl<S: Scheduler> App<S> {
    pub fn with_scheduler(doc: Document, config: &Config, scheduler: S) -> Self {
        let core = ContentCore::install(config, &doc, scheduler);
        Self {
            doc,
            core,
            layout: PageLayout::default(),
            scroll: 0,
            tracker: PointerTracker::new(),
            pointer: None,
            modifier: config.hover.modifier,
            page_area: Rect::default(),
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Feed a QA set to the core as a `QAIA_RENDER` message would
    pub fn load_answers(&mut self, answers: Vec<QaPair>) {
        self.core
            .handle_message(InboundMessage::Render { answers }, &mut self.doc);
    }

    /// Re-lay out the page for a new drawing area
    pub fn set_page_area(&mut self, area: Rect) {
        if area == self.page_area {
            return;
        }
        if area.width != self.page_area.width || self.layout.is_empty() {
            self.layout = PageLayout::build(&self.doc, area.width);
        }
        self.page_area = area;
        self.doc.set_viewport(area_viewport(area));
        self.tracker.clear();
        self.clamp_scroll();
    }

    pub fn max_scroll(&self) -> u16 {
        let lines = u16::try_from(self.layout.len()).unwrap_or(u16::MAX);
        lines.saturating_sub(self.page_area.height)
    }

    pub fn scroll_down(&mut self, amount: u16) {
        self.scroll = self.scroll.saturating_add(amount).min(self.max_scroll());
    }

    pub fn scroll_up(&mut self, amount: u16) {
        self.scroll = self.scroll.saturating_sub(amount);
    }

    fn clamp_scroll(&mut self) {
        self.scroll = self.scroll.min(self.max_scroll());
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
