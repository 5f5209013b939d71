use crate::events::{ApiCall, AppCommand};
use crate::state::validators::{self, ValidationError};
use crate::state::{AppState, LoadingState};
use crate::ui::screens::Screen;
use bank_api::Request;
use throbber_widgets_tui::ThrobberState;

/// Apply a command to the state.
///
/// All state changes happen here. Commands that need the network return the
/// call to make; spawning it is left to the caller's `DataEventHandler`.
pub fn execute_command(command: AppCommand, state: &mut AppState) -> Option<ApiCall> {
    // Save whether we're setting a pending key (we don't want to clear it in that case)
    let is_setting_pending_key = matches!(command, AppCommand::SetPendingKey(_));

    let call = match command {
        // Navigation
        AppCommand::SelectTab(tab) => {
            state.select_tab(tab);
            None
        }
        AppCommand::NextTab => {
            state.select_tab(state.active_tab().next());
            None
        }
        AppCommand::PreviousTab => {
            state.select_tab(state.active_tab().previous());
            None
        }

        // Transaction history
        AppCommand::RefreshTransactions => {
            tracing::debug!("Refreshing group {} history", state.group_id);
            state.transactions_loading = LoadingState::Loading(ThrobberState::default());
            Some(ApiCall::FetchTransactions(
                Request::group(state.group_id).transactions(),
            ))
        }
        AppCommand::ScrollUp => {
            if let Screen::Transactions(s) = state.current_screen_mut() {
                s.scroll_offset = s.scroll_offset.saturating_sub(1);
            }
            None
        }
        AppCommand::ScrollDown => {
            let last = state.transactions.len().saturating_sub(1);
            if let Screen::Transactions(s) = state.current_screen_mut() {
                s.scroll_offset = (s.scroll_offset + 1).min(last);
            }
            None
        }

        // Form editing
        AppCommand::FocusField { forward } => {
            if let Some(form) = state.current_screen_mut().form_mut() {
                form.move_focus(forward);
            }
            None
        }
        AppCommand::CycleChoice { forward } => {
            if let Some(form) = state.current_screen_mut().form_mut() {
                form.cycle_focused(forward);
                form.feedback_mut().validation_error = None;
            }
            None
        }
        AppCommand::AppendFieldChar(c) => {
            if let Some(form) = state.current_screen_mut().form_mut() {
                form.push_char(c);
                form.feedback_mut().validation_error = None;
            }
            None
        }
        AppCommand::DeleteFieldChar => {
            if let Some(form) = state.current_screen_mut().form_mut() {
                form.pop_char();
                form.feedback_mut().validation_error = None;
            }
            None
        }
        AppCommand::SubmitForm => submit_form(state),

        // Simple state updates
        AppCommand::SetPendingKey(c) => {
            state.pending_key = Some(c);
            None
        }
        AppCommand::ClearPendingKey => {
            state.pending_key = None;
            None
        }
        AppCommand::ToggleHelp => {
            state.help_visible = !state.help_visible;
            None
        }
        AppCommand::Quit => {
            state.should_quit = true;
            None
        }
    };

    // Clear pending key after any command except SetPendingKey
    // This ensures multi-key sequences are properly reset after completion
    if !is_setting_pending_key && state.pending_key.is_some() {
        state.pending_key = None;
    }

    call
}

/// Validate the mounted form and build its request.
/// On rejection the form shows why and focuses the offending field.
fn submit_form(state: &mut AppState) -> Option<ApiCall> {
    let ticket = state.ticket();
    let group_id = state.group_id;
    let result = validators::build_action_request(state.current_screen(), group_id)?;
    let form = state.current_screen_mut().form_mut()?;

    match result {
        Ok(request) => {
            tracing::info!("Submitting {} for group {}", ticket.tab.key(), group_id);
            form.feedback_mut().validation_error = None;
            Some(ApiCall::Submit { ticket, request })
        }
        Err(ValidationError { field, message }) => {
            tracing::debug!("Rejected {} form: {}", ticket.tab.key(), message);
            form.set_focus(field);
            form.feedback_mut().validation_error = Some(message);
            None
        }
    }
}
