use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListItem},
    Frame,
};

use crate::state::Tab;
use crate::ui::{layouts, screens::Screen, theme};

pub fn render_help_popup(f: &mut Frame, screen: &Screen) {
    let help_items = get_help_items(screen);

    let (width, height) = layouts::popup_sizes::LARGE;
    let area = layouts::centered_popup(width, height, f.area());
    f.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help (press ? or Esc to close) ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(theme::accent_border_style());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let items: Vec<ListItem> = help_items
        .iter()
        .map(|(key, description)| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:15}", key), theme::header_style()),
                Span::raw(description.clone()),
            ]))
        })
        .collect();

    let list = List::new(items).style(Style::default().fg(Color::White));

    f.render_widget(list, inner);
}

fn get_help_items(screen: &Screen) -> Vec<(String, String)> {
    let mut items: Vec<(String, String)> = vec![];
    let mut push = |key: &str, description: &str| items.push((key.to_string(), description.to_string()));

    // Screen-specific help
    match screen {
        Screen::Transactions(_) => {
            push("r", "Refresh group transactions");
            push("↑/k", "Scroll up");
            push("↓/j", "Scroll down");
        }
        _ => {
            push("↑/↓", "Previous/next field");
            push("Tab/Shift+Tab", "Next/previous field");
            push("←/→", "Change the selected option");
            push("0-9 -", "Type into a number field");
            push("Backspace", "Delete last character");
            push("Enter", "Submit the form");
        }
    }

    // Global help
    push("", "");
    push("--- Global ---", "");
    for tab in Tab::ALL {
        push(&format!("g then {}", tab.shortcut()), tab.title());
    }
    push("]/[", "Next/previous tab");
    push("?", "Toggle this help");
    push("q/Ctrl+C", "Quit application");

    items
}
