//! Tests for app_render

use ratatui::crossterm::event::{Event, KeyModifiers, MouseEvent, MouseEventKind};

use crate::test_utils::test_helpers::*;

fn alt_move(column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind: MouseEventKind::Moved,
        column,
        row,
        modifiers: KeyModifiers::ALT,
    })
}

#[test]
fn test_page_and_status_line_render() {
    let mut app = test_app();
    app.load_answers(refund_answers());

    let output = render_to_string(&mut app, 80, 6);

    assert!(output.contains(REFUND_TEXT));
    assert!(output.contains("Free shipping on orders over fifty dollars."));
    assert!(output.contains("Refunds"));
    assert!(output.contains("1 answers | hold Alt and hover"));
}

#[test]
fn test_tooltip_drawn_next_to_pointer() {
    let mut app = test_app();
    app.load_answers(refund_answers());
    render_to_string(&mut app, 80, 24);

    app.handle_event(alt_move(5, 0));
    advance_app(&mut app, 520);
    let output = render_to_string(&mut app, 80, 24);
    let lines: Vec<&str> = output.lines().collect();

    // Pointer at cell (5, 0) is pixel (44, 8); the box lands at (54, 22), cell (6, 1)
    assert!(lines[2].contains("│30 days.│"));
    assert_eq!(lines[2].find("│30 days.│"), Some(7));
}

#[test]
fn test_hidden_tooltip_not_drawn() {
    let mut app = test_app();
    app.load_answers(refund_answers());
    render_to_string(&mut app, 80, 24);

    app.handle_event(alt_move(5, 0));
    advance_app(&mut app, 520);
    app.handle_event(alt_move(5, 23));
    let output = render_to_string(&mut app, 80, 24);

    assert!(!output.contains("30 days."));
}

#[test]
fn test_tooltip_clamped_at_bottom_right() {
    let mut app = test_app();
    app.load_answers(refund_answers());
    render_to_string(&mut app, 60, 4);

    // Last text cell of the refund paragraph; the box gets pinned inside the edges
    app.handle_event(alt_move(57, 0));
    advance_app(&mut app, 520);
    let output = render_to_string(&mut app, 60, 4);

    assert!(output.contains("│30 days.│"));
}
