use crate::app_core::{AppCore, DataEventHandler};
use crate::events::{ActionRequest, ApiCall, DataEvent};
use crate::input::{Key, KeyEvent};
use crate::state::{AppState, Tab};
use bank_api::endpoints::GroupId;

/// Mock data event handler for tests (no real async tasks)
///
/// Records every outbound call so tests can inspect what would have been sent.
#[derive(Default)]
pub struct RecordingHandler {
    calls: Vec<ApiCall>,
}

impl RecordingHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[ApiCall] {
        &self.calls
    }
}

impl DataEventHandler for RecordingHandler {
    fn dispatch(&mut self, call: ApiCall) {
        self.calls.push(call);
    }
}

pub struct TestApp {
    core: AppCore<RecordingHandler>,
}

impl TestApp {
    /// Create a test app for group 1. The initial fetch is not issued.
    pub fn new() -> Self {
        Self::with_group(GroupId::new(1))
    }

    pub fn with_group(group_id: GroupId) -> Self {
        Self {
            core: AppCore::new(group_id, RecordingHandler::new()),
        }
    }

    /// Run the startup fetch, as the real app does
    pub fn start(&mut self) {
        self.core.start();
    }

    /// Send a single key event
    pub fn send_key(&mut self, key: Key) {
        self.core.handle_key(KeyEvent::new(key));
    }

    /// Send a key event with modifiers
    pub fn send_key_event(&mut self, event: KeyEvent) {
        self.core.handle_key(event);
    }

    /// Send multiple keys in sequence
    pub fn send_keys(&mut self, keys: &[Key]) {
        for key in keys {
            self.send_key(*key);
        }
    }

    /// Type a string into the focused field
    pub fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.send_key(Key::Char(c));
        }
    }

    /// Jump to a tab with its `g` shortcut
    pub fn go_to(&mut self, tab: Tab) {
        self.send_keys(&[Key::Char('g'), Key::Char(tab.shortcut())]);
    }

    /// Inject a data event (simulate API response)
    pub fn send_data_event(&mut self, event: DataEvent) {
        self.core.handle_data_event(event);
    }

    /// Get read-only access to current state
    pub fn state(&self) -> &AppState {
        self.core.state()
    }

    /// Every call dispatched so far, oldest first
    pub fn calls(&self) -> &[ApiCall] {
        self.core.handler().calls()
    }

    pub fn fetch_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|call| matches!(call, ApiCall::FetchTransactions(_)))
            .count()
    }

    pub fn submitted(&self) -> Vec<&ActionRequest> {
        self.calls()
            .iter()
            .filter_map(|call| match call {
                ApiCall::Submit { request, .. } => Some(request),
                ApiCall::FetchTransactions(_) => None,
            })
            .collect()
    }

    /// Message line of the mounted form
    pub fn form_message(&self) -> Option<String> {
        self.state()
            .current_screen()
            .form()
            .and_then(|form| form.feedback().message.clone())
    }

    pub fn validation_error(&self) -> Option<String> {
        self.state()
            .current_screen()
            .form()
            .and_then(|form| form.feedback().validation_error.clone())
    }

    pub fn assert_tab(&self, expected: Tab) {
        assert_eq!(
            self.state().active_tab(),
            expected,
            "Expected different tab. Current: {:?}",
            self.state().current_screen()
        );
    }

    /// Assert that the app should quit
    pub fn assert_should_quit(&self) {
        assert!(
            self.core.should_quit(),
            "App should be marked for quit but is not"
        );
    }

    /// Assert that the app should NOT quit
    pub fn assert_not_quit(&self) {
        assert!(
            !self.core.should_quit(),
            "App should NOT be marked for quit but is"
        );
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}
