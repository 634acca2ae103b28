//! Mapping between terminal cells and the page's pixel space
//!
//! Each cell stands for `CELL_WIDTH` x `CELL_HEIGHT` virtual pixels, so
//! tooltip offsets and padding keep their pixel meaning in a terminal.

use ratatui::{Frame, layout::Rect, widgets::Clear};

use crate::dom::{BoxSize, Point, Viewport};

pub const CELL_WIDTH: f64 = 8.0;
pub const CELL_HEIGHT: f64 = 16.0;

/// Pixel position of the centre of a cell, relative to `area`
pub fn cell_to_point(area: Rect, column: u16, row: u16) -> Point {
    let column = column.saturating_sub(area.x);
    let row = row.saturating_sub(area.y);
    Point::new(
        (f64::from(column) + 0.5) * CELL_WIDTH,
        (f64::from(row) + 0.5) * CELL_HEIGHT,
    )
}

/// Viewport covered by `area`
pub fn area_viewport(area: Rect) -> Viewport {
    Viewport::new(
        f64::from(area.width) * CELL_WIDTH,
        f64::from(area.height) * CELL_HEIGHT,
    )
}

/// Cells covered by a pixel box placed at `position` inside `area`, clipped to it
pub fn box_to_rect(area: Rect, position: Point, size: BoxSize) -> Rect {
    let x = (position.x / CELL_WIDTH).floor().max(0.0) as u16;
    let y = (position.y / CELL_HEIGHT).floor().max(0.0) as u16;
    let width = (size.width / CELL_WIDTH).ceil().max(0.0) as u16;
    let height = (size.height / CELL_HEIGHT).ceil().max(0.0) as u16;

    let x = x.min(area.width);
    let y = y.min(area.height);

    Rect {
        x: area.x + x,
        y: area.y + y,
        width: width.min(area.width - x),
        height: height.min(area.height - y),
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;
