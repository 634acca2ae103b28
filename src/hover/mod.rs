//! Hover module
//!
//! Hover intent gated by a held modifier key: a stable hover over an element
//! with the modifier down runs the matcher and drives the tooltip.

mod extract;
mod hover_state;
mod scheduler;
mod session;

pub use extract::hover_text;
pub use hover_state::{HoverPhase, HoverState, PointerState};
pub use scheduler::{InstantScheduler, Scheduler, TimerHandle, VirtualScheduler};
pub use session::{HoverSession, PageEvent};
