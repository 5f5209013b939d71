use super::{ActionForm, AppState, FormTicket, LoadingState};
use crate::events::{AppCommand, DataEvent};
use crate::ui::screens::Screen;

/// Pure state transition function for data events.
///
/// Returns a follow-up command when the event requires one: a successful
/// action asks for the group history to be fetched again.
pub fn reduce_data_event(state: &mut AppState, event: DataEvent) -> Option<AppCommand> {
    match event {
        DataEvent::TransactionsLoaded { records } => {
            tracing::debug!("Replacing group history with {} records", records.len());
            state.transactions = records;
            state.transactions_loading = LoadingState::Loaded;

            let len = state.transactions.len();
            if let Screen::Transactions(transactions_state) = state.current_screen_mut() {
                if transactions_state.scroll_offset >= len {
                    transactions_state.scroll_offset = len.saturating_sub(1);
                }
            }
            None
        }

        DataEvent::TransactionsLoadFailed { error } => {
            // Previous list stays on screen
            tracing::error!("Failed to load group transactions: {}", error);
            state.transactions_loading = LoadingState::Error(error);
            None
        }

        DataEvent::ActionSucceeded { ticket, message } => {
            match mounted_form(state, ticket) {
                Some(form) => {
                    let text = form.success_text(&message);
                    let feedback = form.feedback_mut();
                    feedback.message = Some(text);
                    feedback.failed = false;
                }
                None => tracing::debug!("Dropping result for unmounted {} form", ticket.tab.key()),
            }
            Some(AppCommand::RefreshTransactions)
        }

        DataEvent::ActionFailed { ticket, error } => {
            tracing::warn!("{} request failed: {}", ticket.tab.key(), error);
            match mounted_form(state, ticket) {
                Some(form) => {
                    let text = form.failure_text(&error);
                    let feedback = form.feedback_mut();
                    feedback.message = Some(text);
                    feedback.failed = true;
                }
                None => tracing::debug!("Dropping result for unmounted {} form", ticket.tab.key()),
            }
            None
        }
    }
}

/// The form that issued `ticket`, if it is still the one on screen
fn mounted_form(state: &mut AppState, ticket: FormTicket) -> Option<&mut dyn ActionForm> {
    if state.ticket() != ticket {
        return None;
    }
    state.current_screen_mut().form_mut()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Tab, TransactionsState};
    use bank_api::endpoints::{transactions::TransactionRecord, GroupId};

    fn record(kind: &str, amount: f64, date: &str) -> TransactionRecord {
        TransactionRecord {
            kind: kind.to_string(),
            amount,
            date: date.to_string(),
        }
    }

    fn feedback_message(state: &AppState) -> Option<String> {
        state
            .current_screen()
            .form()
            .and_then(|form| form.feedback().message.clone())
    }

    #[test]
    fn loaded_records_replace_the_list() {
        let mut state = AppState::new(GroupId::new(1));
        state.transactions = vec![record("sell", 1.0, "2023-12-31")];

        let follow_up = reduce_data_event(
            &mut state,
            DataEvent::TransactionsLoaded {
                records: vec![record("buy", 10.0, "2024-01-01"), record("loan", 5.0, "2024-01-02")],
            },
        );

        assert!(follow_up.is_none());
        assert_eq!(state.transactions.len(), 2);
        assert_eq!(state.transactions[0].kind, "buy");
        assert_eq!(state.transactions_loading, LoadingState::Loaded);
    }

    #[test]
    fn failed_load_keeps_previous_list() {
        let mut state = AppState::new(GroupId::new(1));
        state.transactions = vec![record("buy", 10.0, "2024-01-01")];

        reduce_data_event(
            &mut state,
            DataEvent::TransactionsLoadFailed {
                error: "Request failed with status code 500".to_string(),
            },
        );

        assert_eq!(state.transactions.len(), 1);
        assert!(matches!(state.transactions_loading, LoadingState::Error(_)));
    }

    #[test]
    fn shrinking_list_clamps_scroll() {
        let mut state = AppState::new(GroupId::new(1));
        state.select_tab(Tab::GroupTransactions);
        if let Screen::Transactions(transactions_state) = state.current_screen_mut() {
            *transactions_state = TransactionsState { scroll_offset: 7 };
        }

        reduce_data_event(
            &mut state,
            DataEvent::TransactionsLoaded {
                records: vec![record("buy", 10.0, "2024-01-01")],
            },
        );

        assert_eq!(
            state.current_screen(),
            &Screen::Transactions(TransactionsState { scroll_offset: 0 })
        );
    }

    #[test]
    fn success_sets_message_and_requests_refresh() {
        let mut state = AppState::new(GroupId::new(1));
        let ticket = state.ticket();

        let follow_up = reduce_data_event(
            &mut state,
            DataEvent::ActionSucceeded {
                ticket,
                message: "done".to_string(),
            },
        );

        assert_eq!(follow_up, Some(AppCommand::RefreshTransactions));
        assert_eq!(feedback_message(&state).as_deref(), Some("معامله موفق: done"));
    }

    #[test]
    fn failure_sets_message_without_refresh() {
        let mut state = AppState::new(GroupId::new(1));
        state.select_tab(Tab::SetLoan);
        let ticket = state.ticket();

        let follow_up = reduce_data_event(
            &mut state,
            DataEvent::ActionFailed {
                ticket,
                error: "boom".to_string(),
            },
        );

        assert!(follow_up.is_none());
        assert_eq!(feedback_message(&state).as_deref(), Some("خطا: boom"));
    }

    #[test]
    fn results_for_unmounted_forms_are_dropped() {
        let mut state = AppState::new(GroupId::new(1));
        let stale = state.ticket();
        state.select_tab(Tab::TrustFund);
        state.select_tab(Tab::Trade);

        let follow_up = reduce_data_event(
            &mut state,
            DataEvent::ActionSucceeded {
                ticket: stale,
                message: "late".to_string(),
            },
        );

        assert_eq!(follow_up, Some(AppCommand::RefreshTransactions));
        assert_eq!(feedback_message(&state), None);
    }
}
