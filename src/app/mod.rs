//! Terminal page viewer
//!
//! Hosts one page and its content core in a terminal: mouse motion drives
//! the hover session and the tooltip node is drawn as a floating box.

mod app_events;
mod app_render;
mod app_state;
mod mouse_hover;
mod page_layout;

pub use app_events::IDLE_POLL;
pub use app_state::App;
pub use mouse_hover::{PointerTracker, modifier_held};
pub use page_layout::{PageLayout, PageLine, Segment};
