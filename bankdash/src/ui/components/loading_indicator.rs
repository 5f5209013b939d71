use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::Span,
    widgets::Paragraph,
    Frame,
};

use crate::state::LoadingState;

/// Render the history fetch state as a single glyph.
/// A spinner while loading and a check once loaded. Failed fetches only go to the log.
pub fn render_loading_indicator(f: &mut Frame, area: Rect, loading_state: &LoadingState) {
    let (text, color) = match loading_state {
        LoadingState::NotStarted | LoadingState::Error(_) => return,
        LoadingState::Loading(throbber_state) => {
            let throbber = throbber_widgets_tui::Throbber::default()
                .throbber_set(throbber_widgets_tui::BRAILLE_SIX);
            f.render_stateful_widget(throbber, area, &mut throbber_state.clone());
            return;
        }
        LoadingState::Loaded => ("✓", Color::Green),
    };

    f.render_widget(
        Paragraph::new(Span::styled(text, Style::default().fg(color))).alignment(Alignment::Right),
        area,
    );
}
