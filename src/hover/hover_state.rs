use super::scheduler::TimerHandle;
use crate::dom::{NodeId, Point};

/// Phases of the hover-intent state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HoverPhase {
    /// No check scheduled; tooltip hidden or irrelevant
    #[default]
    Idle,
    /// Modifier held, hover confirmation timer pending
    ModifierHeldWaiting,
    /// Timer fired and the tooltip is showing an answer
    ModifierHeldSettled,
}

/// What the pointer is over and whether the modifier is down
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HoverState {
    pub current_target: Option<NodeId>,
    pub modifier_held: bool,
    /// Owned exclusively by the session; cancelled before any superseding transition
    pub pending_timer: Option<TimerHandle>,
}

/// Last pointer coordinates in viewport space
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    pub x: f64,
    pub y: f64,
}

impl PointerState {
    pub fn update(&mut self, point: Point) {
        self.x = point.x;
        self.y = point.y;
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}
