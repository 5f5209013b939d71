pub mod forms;
pub mod reducer;
pub mod validators;

pub use forms::{
    ActionForm, FormFeedback, FormField, LoanFormState, SpyCardFormState, TradeFormState,
    TrustFundFormState,
};

use crate::ui::screens::Screen;
use bank_api::endpoints::{transactions::TransactionRecord, GroupId};
use throbber_widgets_tui::ThrobberState;

/// Represents loading state separate from data state
#[derive(Default, Debug, Clone, PartialEq)]
pub enum LoadingState {
    #[default]
    NotStarted,
    Loading(ThrobberState),
    Loaded,
    Error(String),
}

/// The five mutually exclusive views of the dashboard
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    #[default]
    Trade,
    TrustFund,
    SetLoan,
    BuySpyCard,
    GroupTransactions,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::Trade,
        Tab::TrustFund,
        Tab::SetLoan,
        Tab::BuySpyCard,
        Tab::GroupTransactions,
    ];

    /// Name of the endpoint the tab is built around
    pub fn key(&self) -> &'static str {
        match self {
            Self::Trade => "trade",
            Self::TrustFund => "trust_fund",
            Self::SetLoan => "set_loan",
            Self::BuySpyCard => "buy_spy_card",
            Self::GroupTransactions => "get_group_trans",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Trade => "معامله (Trade)",
            Self::TrustFund => "صندوق امانی (Trust Fund)",
            Self::SetLoan => "تنظیم وام (Set Loan)",
            Self::BuySpyCard => "خرید کارت جاسوسی (Buy Spy Card)",
            Self::GroupTransactions => "تراکنش‌ها (Transactions)",
        }
    }

    /// Second key of the `g` sequence that jumps to this tab
    pub fn shortcut(&self) -> char {
        match self {
            Self::Trade => 't',
            Self::TrustFund => 'f',
            Self::SetLoan => 'l',
            Self::BuySpyCard => 's',
            Self::GroupTransactions => 'h',
        }
    }

    pub fn from_shortcut(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.shortcut() == c)
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|t| t == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Identifies the form instance a submission came from.
///
/// `mount` changes every time a screen is mounted, so a response that arrives
/// after the user left (or left and came back) no longer matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormTicket {
    pub tab: Tab,
    pub mount: u64,
}

/// Scroll position of the history view
#[derive(Default, Debug, Clone, PartialEq)]
pub struct TransactionsState {
    pub scroll_offset: usize,
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub group_id: GroupId,
    screen: Screen,
    mount: u64,

    // Group history, shared by every tab
    pub transactions: Vec<TransactionRecord>,
    pub transactions_loading: LoadingState,

    // UI state
    pub help_visible: bool,
    pub pending_key: Option<char>,

    // System
    pub should_quit: bool,
}

impl AppState {
    pub fn new(group_id: GroupId) -> Self {
        Self {
            group_id,
            screen: Screen::mount(Tab::default()),
            mount: 0,

            transactions: Vec::new(),
            transactions_loading: LoadingState::default(),

            help_visible: false,
            pending_key: None,

            should_quit: false,
        }
    }

    pub fn active_tab(&self) -> Tab {
        self.screen.tab()
    }

    pub fn current_screen(&self) -> &Screen {
        &self.screen
    }

    pub fn current_screen_mut(&mut self) -> &mut Screen {
        &mut self.screen
    }

    /// Show `tab`, unmounting the current screen and dropping its state.
    /// Returns false if the tab was already active, in which case nothing changes.
    pub fn select_tab(&mut self, tab: Tab) -> bool {
        if self.active_tab() == tab {
            tracing::debug!("Tab {} already active", tab.key());
            return false;
        }
        tracing::debug!("Switching tab {} -> {}", self.active_tab().key(), tab.key());
        self.mount += 1;
        self.screen = Screen::mount(tab);
        true
    }

    /// Ticket for a submission issued from the screen mounted right now
    pub fn ticket(&self) -> FormTicket {
        FormTicket {
            tab: self.active_tab(),
            mount: self.mount,
        }
    }

    pub fn loading_state(&mut self) -> Option<&mut ThrobberState> {
        match self.transactions_loading {
            LoadingState::Loading(ref mut throbber_state) => Some(throbber_state),
            _ => None,
        }
    }
}
