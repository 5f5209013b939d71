use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem},
};

use crate::state::TransactionsState;
use bank_api::endpoints::transactions::TransactionRecord;

pub const HEADING: &str = "لیست تراکنش‌های گروه";

/// One line per record, in the order the service returned them
pub fn history_lines(records: &[TransactionRecord]) -> Vec<String> {
    records.iter().map(ToString::to_string).collect()
}

pub fn render(f: &mut Frame, area: Rect, state: &TransactionsState, records: &[TransactionRecord]) {
    // An empty history is just an empty box
    let items: Vec<ListItem> = history_lines(records)
        .into_iter()
        .skip(state.scroll_offset)
        .map(ListItem::new)
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(HEADING));

    f.render_widget(list, area);
}
