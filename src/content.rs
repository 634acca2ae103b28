//! Per-document installation of the hover core
//!
//! The top-level document gets the full core: hover tracking, matching and the
//! tooltip. A nested frame only answers `QAIA_EXTRACT`, so a page never shows
//! more than one tooltip.

use std::time::Duration;

use crate::bridge::{ExtractResponse, InboundMessage, decode_message, extract_page_text};
use crate::config::Config;
use crate::dom::Document;
use crate::hover::{HoverSession, PageEvent, Scheduler};

/// What the core installs in a given browsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameMode {
    FullCore,
    ExtractOnly,
}

impl FrameMode {
    pub fn detect(doc: &Document) -> Self {
        if doc.is_top_level() {
            Self::FullCore
        } else {
            Self::ExtractOnly
        }
    }
}

pub struct ContentCore<S: Scheduler> {
    mode: FrameMode,
    session: Option<HoverSession<S>>,
}

impl<S: Scheduler> ContentCore<S> {
    pub fn install(config: &Config, doc: &Document, scheduler: S) -> Self {
        let mode = FrameMode::detect(doc);
        let session = match mode {
            FrameMode::FullCore => Some(HoverSession::new(config, scheduler)),
            FrameMode::ExtractOnly => None,
        };
        log::debug!("Installed core in {:?} mode for {}", mode, doc.url());
        Self { mode, session }
    }

    pub fn mode(&self) -> FrameMode {
        self.mode
    }

    /// The hover session; `None` in a nested frame
    pub fn session(&self) -> Option<&HoverSession<S>> {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut HoverSession<S>> {
        self.session.as_mut()
    }

    pub fn dispatch(&mut self, event: PageEvent, doc: &mut Document) {
        if let Some(session) = self.session.as_mut() {
            session.dispatch(event, doc);
        }
    }

    pub fn poll_timers(&mut self, doc: &mut Document) {
        if let Some(session) = self.session.as_mut() {
            session.poll_timers(doc);
        }
    }

    /// Time until the debounce timer is due, if one is pending
    pub fn next_timer_due(&self) -> Option<Duration> {
        self.session
            .as_ref()
            .and_then(|session| session.scheduler().next_due_in())
    }

    /// Handle one message; only `QAIA_EXTRACT` produces a response
    pub fn handle_message(
        &mut self,
        message: InboundMessage,
        doc: &mut Document,
    ) -> Option<ExtractResponse> {
        match message {
            InboundMessage::Extract => Some(ExtractResponse {
                text: extract_page_text(doc, self.mode),
                url: doc.url().to_string(),
                title: doc.title().to_string(),
            }),
            InboundMessage::Render { answers } => {
                match self.session.as_mut() {
                    Some(session) => session.replace_answers(answers, doc),
                    None => log::debug!("Ignoring QAIA_RENDER in nested frame"),
                }
                None
            }
            InboundMessage::Error { error } => {
                match self.session.as_mut() {
                    Some(session) => session.notify_error(&error, doc),
                    None => log::debug!("Ignoring QAIA_ERROR in nested frame"),
                }
                None
            }
        }
    }

    /// Decode and handle a raw JSON message
    pub fn handle_raw_message(&mut self, raw: &str, doc: &mut Document) -> Option<ExtractResponse> {
        let message = decode_message(raw)?;
        self.handle_message(message, doc)
    }

    /// The page moved on: drop answers and any hover in progress
    pub fn navigate(&mut self, doc: &mut Document) {
        if let Some(session) = self.session.as_mut() {
            session.reset(doc);
        }
    }
}

#[cfg(test)]
#[path = "content_tests.rs"]
mod content_tests;
