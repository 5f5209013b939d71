//! Shared help bar component for consistent bottom navigation hints.

use ratatui::prelude::Rect;
use ratatui::{
    layout::Alignment,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::{screens::Screen, theme};

/// Render a standard help bar with the given text.
pub fn render_help_bar(f: &mut Frame, area: Rect, text: &str) {
    let help = Paragraph::new(text)
        .style(theme::help_text_style())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(help, area);
}

pub const HELP_TEXT_FORM: &str =
    "↑/↓: field | ←/→: choose | Enter: submit | ]/[: tab | ?: help | q: quit";

pub const HELP_TEXT_HISTORY: &str = "r: refresh | ↑/↓: scroll | ]/[: tab | ?: help | q: quit";

pub fn help_text(screen: &Screen) -> &'static str {
    match screen {
        Screen::Transactions(_) => HELP_TEXT_HISTORY,
        _ => HELP_TEXT_FORM,
    }
}
