//! Tooltip module
//!
//! Owns the single floating answer box. The node carries a fixed id so that a
//! second installation of the core on the same page reuses it instead of
//! creating a duplicate.

mod placement;
mod tooltip_render;

pub use placement::place_tooltip;
pub use tooltip_render::{
    TOOLTIP_ID, TooltipRenderer, ensure_tooltip, is_tooltip_visible, tooltip_text,
};
