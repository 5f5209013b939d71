use crate::commands::{executor, handlers};
use crate::events::{ApiCall, AppCommand, DataEvent};
use crate::input::KeyEvent;
use crate::state::{reducer, AppState};
use bank_api::endpoints::GroupId;

/// Trait for performing outbound calls (production = spawned tasks, test = recorder)
///
/// State transitions never touch the network. The executor hands back an
/// `ApiCall` and the handler decides how it is carried out, so tests can
/// observe requests without a server.
pub trait DataEventHandler {
    fn dispatch(&mut self, call: ApiCall);
}

/// Testable application core without terminal dependencies
///
/// Generic over H (handler) for zero-cost abstraction.
pub struct AppCore<H: DataEventHandler> {
    ui_state: AppState,
    handler: H,
}

impl<H: DataEventHandler> AppCore<H> {
    pub fn new(group_id: GroupId, handler: H) -> Self {
        Self {
            ui_state: AppState::new(group_id),
            handler,
        }
    }

    /// Issue the initial history fetch
    pub fn start(&mut self) {
        tracing::info!("Loading history for group {}", self.ui_state.group_id);
        self.execute(AppCommand::RefreshTransactions);
    }

    /// Translate a key press to a command and execute it
    pub fn handle_key(&mut self, event: KeyEvent) {
        if let Some(command) = handlers::handle_key_input(event, &self.ui_state) {
            tracing::debug!("Executing command: {:?}", command);
            self.execute(command);
        }
    }

    /// Apply a data event, running any follow-up command it produces
    ///
    /// Data events come from background tasks in production. In tests they are
    /// injected directly to simulate responses.
    pub fn handle_data_event(&mut self, event: DataEvent) {
        if let Some(command) = reducer::reduce_data_event(&mut self.ui_state, event) {
            self.execute(command);
        }
    }

    pub fn execute(&mut self, command: AppCommand) {
        if let Some(call) = executor::execute_command(command, &mut self.ui_state) {
            self.handler.dispatch(call);
        }
    }

    /// Advance the loading animation
    pub fn tick(&mut self) {
        if let Some(throbber_state) = self.ui_state.loading_state() {
            throbber_state.calc_next();
        }
    }

    /// Get read-only access to the current UI state (for rendering or assertions)
    pub fn state(&self) -> &AppState {
        &self.ui_state
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    pub fn should_quit(&self) -> bool {
        self.ui_state.should_quit
    }
}
