pub mod components;
pub mod layouts;
pub mod screens;
pub mod theme;
pub mod utils;

use crate::state::AppState;
use components::{help_bar, help_popup, screen_title, tab_bar};
use ratatui::Frame;
use screens::*;

pub const DASHBOARD_TITLE: &str = "داشبورد بانک ونگارد";

/// Pure render dispatcher - routes to appropriate screen renderer
/// This function is read-only and never mutates state
pub fn render_app(f: &mut Frame, state: &AppState) {
    let (title_area, tabs_area, content_area, help_area) = layouts::dashboard_layout(f.area());

    screen_title::render_screen_title(f, title_area, DASHBOARD_TITLE, &state.transactions_loading);
    tab_bar::render_tab_bar(f, tabs_area, state.active_tab());

    match state.current_screen() {
        Screen::Trade(form) => trade_screen::render(f, content_area, form),
        Screen::TrustFund(form) => trust_fund_screen::render(f, content_area, form),
        Screen::Loan(form) => loan_screen::render(f, content_area, form),
        Screen::SpyCard(form) => spy_card_screen::render(f, content_area, form),
        Screen::Transactions(transactions_state) => transactions_screen::render(
            f,
            content_area,
            transactions_state,
            &state.transactions,
        ),
    }

    help_bar::render_help_bar(f, help_area, help_bar::help_text(state.current_screen()));

    // Render help popup on top if visible
    if state.help_visible {
        help_popup::render_help_popup(f, state.current_screen());
    }
}
