//! Tests for app_state

use ratatui::layout::Rect;

use super::*;
use crate::content::FrameMode;
use crate::dom::Viewport;
use crate::test_utils::test_helpers::*;

#[test]
fn test_new_app_installs_full_core() {
    let app = test_app();

    assert_eq!(app.core.mode(), FrameMode::FullCore);
    assert_eq!(app.modifier, ModifierKey::Alt);
    assert!(!app.should_quit());
}

#[test]
fn test_nested_page_installs_extract_only() {
    let mut page = test_page();
    page.doc.set_top_level(false);
    let app = App::new(page.doc, &Config::default());

    assert_eq!(app.core.mode(), FrameMode::ExtractOnly);
}

#[test]
fn test_load_answers_reaches_session() {
    let mut app = test_app();
    app.load_answers(refund_answers());

    assert_eq!(app.core.session().unwrap().qa_set().len(), 1);
}

#[test]
fn test_page_area_sets_viewport_and_layout() {
    let mut app = test_app();
    app.set_page_area(Rect::new(0, 0, 40, 10));

    assert_eq!(app.doc.viewport(), Viewport::new(320.0, 160.0));
    assert_eq!(app.layout.width(), 40);
    assert!(app.layout.len() > 2);
}

#[test]
fn test_scroll_is_clamped_to_content() {
    let mut app = test_app();
    app.set_page_area(Rect::new(0, 0, 20, 2));
    let max = app.max_scroll();
    assert!(max > 0);

    app.scroll_down(100);
    assert_eq!(app.scroll, max);

    app.scroll_up(100);
    assert_eq!(app.scroll, 0);
}

#[test]
fn test_resize_clamps_scroll() {
    let mut app = test_app();
    app.set_page_area(Rect::new(0, 0, 20, 2));
    app.scroll_down(100);

    app.set_page_area(Rect::new(0, 0, 200, 50));

    assert_eq!(app.scroll, 0);
}

#[test]
fn test_modifier_from_config() {
    let mut config = Config::default();
    config.hover.modifier = ModifierKey::Ctrl;

    let app = App::new(test_page().doc, &config);

    assert_eq!(app.modifier, ModifierKey::Ctrl);
}
