//! Centralized theme constants and style functions for consistent UI styling.
//!
//! All colors, layout constants, and common styles should be defined here
//! to ensure visual consistency across all screens and components.

use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// Colors
// =============================================================================

/// Color for success messages
pub const COLOR_POSITIVE: Color = Color::Green;

/// Color for failure and validation messages
pub const COLOR_NEGATIVE: Color = Color::Red;

/// Color for table headers and key hints
pub const COLOR_HEADER: Color = Color::Yellow;

/// Color for help text and secondary information
pub const COLOR_HELP_TEXT: Color = Color::Gray;

/// Color for screen titles and accent text
pub const COLOR_TITLE: Color = Color::Cyan;

/// Border color for accent/highlighted elements
pub const COLOR_BORDER_ACCENT: Color = Color::Cyan;

/// Background for form fields when focused
pub const COLOR_FORM_FIELD_BG: Color = Color::DarkGray;

// =============================================================================
// Layout Constants
// =============================================================================

/// Standard margin around screen content
pub const SCREEN_MARGIN: u16 = 1;

/// Height of the title/header area
pub const TITLE_HEIGHT: u16 = 1;

/// Height of the tab strip, borders included
pub const TAB_BAR_HEIGHT: u16 = 3;

/// Height of the help bar at the bottom
pub const HELP_BAR_HEIGHT: u16 = 3;

// =============================================================================
// Style Functions
// =============================================================================

/// Style for table headers
pub fn header_style() -> Style {
    Style::default()
        .fg(COLOR_HEADER)
        .add_modifier(Modifier::BOLD)
}

/// Style for help bar text
pub fn help_text_style() -> Style {
    Style::default().fg(COLOR_HELP_TEXT)
}

/// Style for screen titles
pub fn title_style() -> Style {
    Style::default()
        .fg(COLOR_TITLE)
        .add_modifier(Modifier::BOLD)
}

/// Style for the selected tab
pub fn active_tab_style() -> Style {
    Style::default()
        .fg(COLOR_TITLE)
        .add_modifier(Modifier::BOLD)
}

/// Style for form fields when focused
pub fn form_field_focused_style() -> Style {
    Style::default()
        .bg(COLOR_FORM_FIELD_BG)
        .add_modifier(Modifier::BOLD)
}

/// Style for form fields when not focused
pub fn form_field_style() -> Style {
    Style::default().fg(Color::White)
}

/// Style for a submission outcome
pub fn message_style(is_error: bool) -> Style {
    let color = if is_error {
        COLOR_NEGATIVE
    } else {
        COLOR_POSITIVE
    };
    Style::default().fg(color)
}

/// Style for accent borders
pub fn accent_border_style() -> Style {
    Style::default().fg(COLOR_BORDER_ACCENT)
}
