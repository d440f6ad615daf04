//! Inline style and class computation.
//!
//! Components put per-prop values inline. Hover and focus states can't be
//! inline, so `tab_item_style` exports them as custom properties and
//! `stylesheet()` reads them back.

use super::intent::Intent;
use super::tabs::{TabSize, TabState};
use super::tokens::{Colors, FontFamily};

const INHERIT: &str = "inherit";

/// Colours of a tab for its selected/disabled combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabColors {
    pub text: &'static str,
    pub icon: &'static str,
    pub hover_text: &'static str,
    pub hover_icon: &'static str,
    pub border: &'static str,
    pub focus_border: &'static str,
}

pub fn tab_colors(selected: bool, disabled: bool) -> TabColors {
    let (text, icon, hover_text, hover_icon) = if selected {
        (Colors::BLUE_500, Colors::BLUE_500, Colors::BLUE_700, Colors::BLUE_700)
    } else if disabled {
        (Colors::GRAY_300, Colors::GRAY_300, Colors::GRAY_300, Colors::GRAY_300)
    } else {
        (Colors::GRAY_700, INHERIT, Colors::BLUE_700, INHERIT)
    };
    TabColors {
        text,
        icon,
        hover_text,
        hover_icon,
        border: if selected { Colors::BLUE_500 } else { "transparent" },
        focus_border: if selected { Colors::BLUE_500 } else { Colors::BLUE_200 },
    }
}

pub fn tab_strip_style(size: TabSize) -> String {
    let (font_size, line_height) = match size {
        TabSize::Regular => (14, 20),
        TabSize::Small => (12, 16),
    };
    format!(
        "display: flex; gap: 16px; border-bottom: 1px solid {}; font-family: {}; \
         font-size: {font_size}px; line-height: {line_height}px; font-weight: 600;",
        Colors::GRAY_100,
        FontFamily::DEFAULT,
    )
}

pub fn tab_item_style(state: &TabState, size: TabSize) -> String {
    let colors = tab_colors(state.selected, state.disabled);
    let padding = match size {
        TabSize::Regular => "18px 0 16px",
        TabSize::Small => "12px 0 10px",
    };
    format!(
        "padding: {padding}; border-bottom: 2px solid {border}; display: flex; \
         align-items: center; gap: 6px; cursor: default; user-select: none; color: {text}; \
         --tab-icon-color: {icon}; --tab-hover-color: {hover_text}; \
         --tab-hover-icon-color: {hover_icon}; --tab-focus-border: {focus};",
        border = colors.border,
        text = colors.text,
        icon = colors.icon,
        hover_text = colors.hover_text,
        hover_icon = colors.hover_icon,
        focus = colors.focus_border,
    )
}

pub fn tab_item_class(state: &TabState) -> String {
    let mut class = String::from("tab-item");
    if state.selected {
        class.push_str(" tab-item--selected");
    }
    if state.disabled {
        class.push_str(" tab-item--disabled");
    }
    class
}

pub fn count_style() -> String {
    format!(
        "display: inline; font-family: {}; font-size: 14px; font-weight: 500; \
         letter-spacing: -0.02%; padding: 0 4px; color: {}; background: {};",
        FontFamily::MONOSPACE,
        Colors::GRAY_900,
        Colors::GRAY_100,
    )
}

pub fn tag_class(intent: Intent) -> String {
    format!("tag tag--{}", intent.as_str())
}

pub fn tag_style(intent: Intent) -> String {
    let palette = intent.palette();
    format!(
        "display: inline-flex; align-items: center; gap: 4px; padding: 2px 8px; \
         border-radius: 8px; font-family: {}; font-size: 12px; line-height: 16px; \
         font-weight: 400; background: {}; color: {}; --tag-icon-color: {};",
        FontFamily::DEFAULT,
        palette.background,
        palette.text,
        palette.icon,
    )
}

/// Rules for states inline styles can't express.
pub fn stylesheet() -> String {
    [
        ".tab-item, .tab-item a { cursor: default; user-select: none; }",
        ".tab-item .icon-wrapper { color: var(--tab-icon-color); }",
        ".tab-item:hover, .tab-item:hover a { text-decoration: none; color: var(--tab-hover-color); }",
        ".tab-item:hover .icon-wrapper { color: var(--tab-hover-icon-color); }",
        ".tab-item:focus { outline: none !important; }",
        ".tab-item:focus-visible { border-bottom-color: var(--tab-focus-border) !important; }",
        ".tag .icon-wrapper { color: var(--tag-icon-color); display: inline-flex; }",
        ".icon-wrapper svg { display: block; }",
    ]
    .join("\n")
}
