//! Hover a page element with a modifier key held and see the pre-computed
//! answer to the question it contains in a floating tooltip.

pub mod app;
pub mod bridge;
pub mod cli;
pub mod config;
pub mod content;
pub mod dom;
pub mod error;
pub mod hover;
pub mod matcher;
pub mod qa;
pub mod tooltip;
pub mod widgets;
