use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Tabs};
use ratatui::Frame;

use crate::state::Tab;
use crate::ui::theme;

/// Navigation strip with one entry per tab, the active one highlighted
pub fn render_tab_bar(f: &mut Frame, area: Rect, active: Tab) {
    let titles: Vec<Line> = Tab::ALL
        .iter()
        .map(|tab| {
            Line::from(vec![
                Span::styled(
                    format!("{}:", tab.shortcut()),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(tab.title()),
            ])
        })
        .collect();

    let tabs = Tabs::new(titles)
        .select(active.index())
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::White))
        .highlight_style(theme::active_tab_style())
        .divider(" │ ");

    f.render_widget(tabs, area);
}
