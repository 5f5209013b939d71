use crate::events::AppCommand;
use crate::input::{Key, KeyEvent};
use crate::state::{AppState, Tab};
use crate::ui::screens::Screen;

/// Map user input (KeyEvent) to AppCommand based on current UI state
/// Returns None if the key should be ignored
pub fn handle_key_input(event: KeyEvent, state: &AppState) -> Option<AppCommand> {
    let key = event.key;

    // Ctrl+C always quits
    if event.ctrl {
        return match key {
            Key::Char('c') => Some(AppCommand::Quit),
            _ => None,
        };
    }

    // Priority 1: help popup swallows everything else
    if state.help_visible {
        return match key {
            Key::Char('?') | Key::Esc => Some(AppCommand::ToggleHelp),
            Key::Char('q') => Some(AppCommand::Quit),
            _ => None,
        };
    }

    // Priority 2: second key of a `g` sequence
    if let Some(pending) = state.pending_key {
        return match (pending, key) {
            ('g', Key::Char(c)) => Tab::from_shortcut(c)
                .map(AppCommand::SelectTab)
                .or(Some(AppCommand::ClearPendingKey)),
            _ => Some(AppCommand::ClearPendingKey),
        };
    }

    // Priority 3: global keys
    match key {
        Key::Char('?') => return Some(AppCommand::ToggleHelp),
        Key::Char('q') => return Some(AppCommand::Quit),
        Key::Char('g') => return Some(AppCommand::SetPendingKey('g')),
        Key::Char(']') => return Some(AppCommand::NextTab),
        Key::Char('[') => return Some(AppCommand::PreviousTab),
        _ => {}
    }

    // Priority 4: screen keys
    match state.current_screen() {
        Screen::Transactions(_) => handle_history_keys(key),
        _ => handle_form_keys(key),
    }
}

fn handle_history_keys(key: Key) -> Option<AppCommand> {
    match key {
        Key::Char('r') => Some(AppCommand::RefreshTransactions),
        Key::Up | Key::Char('k') => Some(AppCommand::ScrollUp),
        Key::Down | Key::Char('j') => Some(AppCommand::ScrollDown),
        _ => None,
    }
}

fn handle_form_keys(key: Key) -> Option<AppCommand> {
    match key {
        Key::Up | Key::BackTab => Some(AppCommand::FocusField { forward: false }),
        Key::Down | Key::Tab => Some(AppCommand::FocusField { forward: true }),
        Key::Left => Some(AppCommand::CycleChoice { forward: false }),
        Key::Right => Some(AppCommand::CycleChoice { forward: true }),
        Key::Backspace => Some(AppCommand::DeleteFieldChar),
        Key::Enter => Some(AppCommand::SubmitForm),
        Key::Char(c) if c.is_ascii_digit() || c == '-' => Some(AppCommand::AppendFieldChar(c)),
        _ => None,
    }
}
