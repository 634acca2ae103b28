//! Hover-intent state machine
//!
//! One session exists per document. Pointer and focus events arrive through
//! [`HoverSession::dispatch`]; the debounce timer comes back through
//! [`HoverSession::on_timer_fired`]. A fired timer re-reads the live modifier
//! flag and ignores any handle that is no longer the pending one.

use std::time::Duration;

use super::extract::hover_text;
use super::hover_state::{HoverPhase, HoverState, PointerState};
use super::scheduler::{Scheduler, TimerHandle};
use crate::config::Config;
use crate::dom::{Document, NodeId, Point};
use crate::matcher::MatchEngine;
use crate::qa::{QaPair, QaSet};
use crate::tooltip::TooltipRenderer;

/// DOM-style events the session reacts to
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PageEvent {
    /// `mouseover`: the pointer entered `target`
    PointerEnter { target: NodeId, modifier: bool },
    /// `mousemove`
    PointerMove { x: f64, y: f64, modifier: bool },
    /// `mouseout`
    PointerLeave,
    /// Window lost focus
    Blur,
}

pub struct HoverSession<S: Scheduler> {
    hover: HoverState,
    phase: HoverPhase,
    pointer: PointerState,
    qa_set: QaSet,
    matcher: MatchEngine,
    tooltip: TooltipRenderer,
    delay: Duration,
    scheduler: S,
    evaluations: u64,
}

impl<S: Scheduler> HoverSession<S> {
    pub fn new(config: &Config, scheduler: S) -> Self {
        Self {
            hover: HoverState::default(),
            phase: HoverPhase::Idle,
            pointer: PointerState::default(),
            qa_set: QaSet::new(),
            matcher: MatchEngine::new(config.matcher.clone()),
            tooltip: TooltipRenderer::new(config.tooltip.clone()),
            delay: Duration::from_millis(config.hover.delay_ms),
            scheduler,
            evaluations: 0,
        }
    }

    pub fn phase(&self) -> HoverPhase {
        self.phase
    }

    pub fn hover_state(&self) -> &HoverState {
        &self.hover
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    pub fn qa_set(&self) -> &QaSet {
        &self.qa_set
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Number of times a fired timer ran the matcher
    pub fn evaluations(&self) -> u64 {
        self.evaluations
    }

    pub fn has_pending_timer(&self) -> bool {
        self.hover.pending_timer.is_some()
    }

    pub fn dispatch(&mut self, event: PageEvent, doc: &mut Document) {
        match event {
            PageEvent::PointerEnter { target, modifier } => {
                self.on_pointer_enter(target, modifier, doc)
            }
            PageEvent::PointerMove { x, y, modifier } => {
                self.on_pointer_move(Point::new(x, y), modifier, doc)
            }
            PageEvent::PointerLeave => self.on_pointer_leave(doc),
            PageEvent::Blur => self.on_blur(doc),
        }
    }

    pub fn on_pointer_enter(&mut self, target: NodeId, modifier: bool, doc: &mut Document) {
        self.hover.current_target = Some(target);
        self.hover.modifier_held = modifier;
        self.schedule_hover_check(doc);
    }

    pub fn on_pointer_move(&mut self, point: Point, modifier: bool, doc: &mut Document) {
        self.pointer.update(point);

        if self.hover.modifier_held && !modifier {
            self.hover.modifier_held = false;
            self.go_idle(doc);
        } else if !self.hover.modifier_held && modifier {
            self.hover.modifier_held = true;
            if self.hover.current_target.is_some() {
                self.schedule_hover_check(doc);
            }
        }
    }

    pub fn on_pointer_leave(&mut self, doc: &mut Document) {
        self.go_idle(doc);
    }

    /// Emergency reset: a modifier released outside the window never reports back
    pub fn on_blur(&mut self, doc: &mut Document) {
        self.hover.modifier_held = false;
        self.go_idle(doc);
    }

    /// Run every timer the scheduler reports as due
    pub fn poll_timers(&mut self, doc: &mut Document) {
        for handle in self.scheduler.take_due() {
            self.on_timer_fired(handle, doc);
        }
    }

    pub fn on_timer_fired(&mut self, handle: TimerHandle, doc: &mut Document) {
        if self.hover.pending_timer != Some(handle) {
            log::debug!("Ignoring stale hover timer {:?}", handle);
            return;
        }
        self.hover.pending_timer = None;

        if !self.hover.modifier_held {
            self.hide(doc);
            return;
        }

        let Some(target) = self.hover.current_target else {
            self.hide(doc);
            return;
        };

        self.evaluations += 1;
        let text = hover_text(doc, target);
        let answer = self
            .matcher
            .pick_best_answer(&text, &self.qa_set)
            .filter(|qa| !qa.answer.is_empty())
            .map(|qa| qa.answer.clone());

        match answer {
            Some(answer) => {
                self.tooltip.show(doc, self.pointer.position(), &answer);
                self.phase = HoverPhase::ModifierHeldSettled;
            }
            None => self.hide(doc),
        }
    }

    /// Replace the QA set wholesale and hide whatever is showing
    pub fn replace_answers(&mut self, answers: Vec<QaPair>, doc: &mut Document) {
        log::debug!("Received {} QA pairs", answers.len());
        self.qa_set.replace(answers);
        self.hide_settled(doc);
    }

    /// Upstream failure: log only, and never leave a stale answer visible
    pub fn notify_error(&mut self, error: &str, doc: &mut Document) {
        log::warn!("QAIA_ERROR: {}", error);
        self.hide_settled(doc);
    }

    /// Back to a fresh document state: no answers, modifier up, nothing pending
    pub fn reset(&mut self, doc: &mut Document) {
        self.qa_set.clear();
        self.cancel_pending();
        self.hover = HoverState::default();
        self.hide(doc);
    }

    fn schedule_hover_check(&mut self, doc: &mut Document) {
        self.cancel_pending();

        if !self.hover.modifier_held {
            self.hide(doc);
            return;
        }

        self.hover.pending_timer = Some(self.scheduler.schedule(self.delay));
        self.phase = HoverPhase::ModifierHeldWaiting;
    }

    fn go_idle(&mut self, doc: &mut Document) {
        self.cancel_pending();
        self.hide(doc);
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.hover.pending_timer.take() {
            self.scheduler.cancel(handle);
        }
    }

    fn hide(&mut self, doc: &mut Document) {
        self.tooltip.hide(doc);
        self.phase = HoverPhase::Idle;
    }

    /// Hide the tooltip without dropping a pending hover check
    fn hide_settled(&mut self, doc: &mut Document) {
        self.tooltip.hide(doc);
        if self.phase == HoverPhase::ModifierHeldSettled {
            self.phase = HoverPhase::Idle;
        }
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
