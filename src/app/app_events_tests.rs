//! Tests for app_events

use ratatui::crossterm::event::{KeyEventState, MouseButton};

use super::*;
use crate::hover::HoverPhase;
use crate::test_utils::test_helpers::*;
use crate::tooltip::{is_tooltip_visible, tooltip_text};

fn mouse(kind: MouseEventKind, column: u16, row: u16, modifiers: KeyModifiers) -> Event {
    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers,
    })
}

fn moved(column: u16, row: u16, modifiers: KeyModifiers) -> Event {
    mouse(MouseEventKind::Moved, column, row, modifiers)
}

fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
    Event::Key(KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    })
}

/// App drawn once at 80x24 with the refund answers loaded
fn ready_app() -> App<crate::hover::VirtualScheduler> {
    let mut app = test_app();
    app.load_answers(refund_answers());
    render_to_string(&mut app, 80, 24);
    app
}

#[test]
fn test_alt_hover_shows_answer_after_delay() {
    let mut app = ready_app();

    app.handle_event(moved(5, 0, KeyModifiers::ALT));
    advance_app(&mut app, 519);
    assert!(!is_tooltip_visible(&app.doc));

    advance_app(&mut app, 1);
    assert_eq!(tooltip_text(&app.doc).as_deref(), Some(REFUND_ANSWER));
}

#[test]
fn test_plain_hover_never_shows() {
    let mut app = ready_app();

    app.handle_event(moved(5, 0, KeyModifiers::NONE));
    advance_app(&mut app, 2000);

    assert!(!is_tooltip_visible(&app.doc));
}

#[test]
fn test_other_modifier_is_ignored() {
    let mut app = ready_app();

    app.handle_event(moved(5, 0, KeyModifiers::CONTROL));
    advance_app(&mut app, 2000);

    assert!(!is_tooltip_visible(&app.doc));
}

#[test]
fn test_releasing_alt_mid_wait_cancels() {
    let mut app = ready_app();

    app.handle_event(moved(5, 0, KeyModifiers::ALT));
    advance_app(&mut app, 300);
    app.handle_event(moved(6, 0, KeyModifiers::NONE));
    advance_app(&mut app, 1000);

    assert!(!is_tooltip_visible(&app.doc));
    assert_eq!(app.core.session().unwrap().evaluations(), 0);
}

#[test]
fn test_focus_lost_blurs_session() {
    let mut app = ready_app();
    app.handle_event(moved(5, 0, KeyModifiers::ALT));
    advance_app(&mut app, 520);
    assert!(is_tooltip_visible(&app.doc));

    app.handle_event(Event::FocusLost);

    assert!(!is_tooltip_visible(&app.doc));
    let session = app.core.session().unwrap();
    assert!(!session.hover_state().modifier_held);
    assert_eq!(session.phase(), HoverPhase::Idle);
}

#[test]
fn test_moving_to_status_line_leaves_page() {
    let mut app = ready_app();
    app.handle_event(moved(5, 0, KeyModifiers::ALT));
    advance_app(&mut app, 520);

    app.handle_event(moved(5, 23, KeyModifiers::ALT));

    assert!(!is_tooltip_visible(&app.doc));
    assert_eq!(app.tracker.hovered(), None);
}

#[test]
fn test_blank_cells_target_body() {
    let mut app = ready_app();

    app.handle_event(moved(70, 10, KeyModifiers::NONE));

    assert_eq!(app.tracker.hovered(), Some(app.doc.body()));
}

#[test]
fn test_poll_timeout_follows_pending_timer() {
    let mut app = ready_app();
    assert_eq!(app.poll_timeout(), IDLE_POLL);

    app.handle_event(moved(5, 0, KeyModifiers::ALT));
    advance_app(&mut app, 400);

    assert_eq!(app.poll_timeout(), std::time::Duration::from_millis(120));
}

#[test]
fn test_quit_keys() {
    for event in [
        key(KeyCode::Char('q'), KeyModifiers::NONE),
        key(KeyCode::Esc, KeyModifiers::NONE),
        key(KeyCode::Char('c'), KeyModifiers::CONTROL),
    ] {
        let mut app = ready_app();
        app.handle_event(event);
        assert!(app.should_quit());
    }
}

#[test]
fn test_wheel_and_keys_scroll() {
    let mut app = test_app();
    render_to_string(&mut app, 20, 3);

    app.handle_event(mouse(MouseEventKind::ScrollDown, 0, 0, KeyModifiers::NONE));
    assert_eq!(app.scroll, 3);

    app.handle_event(key(KeyCode::Char('k'), KeyModifiers::NONE));
    assert_eq!(app.scroll, 2);

    app.handle_event(mouse(MouseEventKind::ScrollUp, 0, 0, KeyModifiers::NONE));
    assert_eq!(app.scroll, 0);

    app.handle_event(key(KeyCode::End, KeyModifiers::NONE));
    assert_eq!(app.scroll, app.max_scroll());

    app.handle_event(key(KeyCode::Home, KeyModifiers::NONE));
    assert_eq!(app.scroll, 0);
}

#[test]
fn test_wheel_under_still_pointer_retargets_pending_check() {
    let mut app = test_app();
    app.load_answers(refund_answers());
    // One page row: the refund paragraph, then the shipping one after scrolling
    render_to_string(&mut app, 80, 2);
    let shipping = app.doc.elements_by_tag("p")[1];

    app.handle_event(moved(5, 0, KeyModifiers::ALT));
    advance_app(&mut app, 300);
    app.handle_event(mouse(MouseEventKind::ScrollDown, 5, 0, KeyModifiers::ALT));

    assert_eq!(app.scroll, 2);
    assert_eq!(app.tracker.hovered(), Some(shipping));

    advance_app(&mut app, 520);
    assert!(!is_tooltip_visible(&app.doc));
    assert_eq!(app.core.session().unwrap().phase(), HoverPhase::Idle);
}

#[test]
fn test_key_scroll_hides_tooltip_of_scrolled_away_element() {
    let mut app = test_app();
    app.load_answers(refund_answers());
    render_to_string(&mut app, 80, 2);
    app.handle_event(moved(5, 0, KeyModifiers::ALT));
    advance_app(&mut app, 520);
    assert!(is_tooltip_visible(&app.doc));

    app.handle_event(key(KeyCode::Char('G'), KeyModifiers::NONE));

    assert!(!is_tooltip_visible(&app.doc));
    assert_ne!(app.tracker.hovered(), app.doc.elements_by_tag("p").first().copied());
}

#[test]
fn test_clicks_do_not_hover() {
    let mut app = ready_app();

    app.handle_event(mouse(
        MouseEventKind::Down(MouseButton::Left),
        5,
        0,
        KeyModifiers::ALT,
    ));

    assert_eq!(app.tracker.hovered(), None);
    assert!(!app.core.session().unwrap().has_pending_timer());
}
