use crate::config::TooltipConfig;
use crate::dom::{BoxSize, Point, Viewport};

/// Position a box of `size` down-right of the pointer, kept inside the viewport.
///
/// Overflow past the right or bottom edge pins the box flush against that edge
/// minus the padding. A box that then starts closer than the padding to the
/// left or top edge is pinned at the padding, so oversized content overflows
/// right/bottom rather than off-screen.
pub fn place_tooltip(pointer: Point, size: BoxSize, viewport: Viewport, config: &TooltipConfig) -> Point {
    let pad = config.padding;
    let mut x = pointer.x + config.offset_x;
    let mut y = pointer.y + config.offset_y;

    if x + size.width + pad > viewport.width {
        x = viewport.width - size.width - pad;
    }
    if y + size.height + pad > viewport.height {
        y = viewport.height - size.height - pad;
    }
    if x < pad {
        x = pad;
    }
    if y < pad {
        y = pad;
    }

    Point { x, y }
}

#[cfg(test)]
#[path = "placement_tests.rs"]
mod placement_tests;
