use bank_api::endpoints::{
    loans::SetLoan, spy_cards::BuySpyCard, trade::Trade, transactions::ListGroupTransactions,
    transactions::TransactionRecord, trust_fund::TrustFund,
};

use crate::state::{FormTicket, Tab};

/// Commands to execute (user actions → state changes and outbound requests)
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    // Navigation
    SelectTab(Tab),
    NextTab,
    PreviousTab,

    // Transaction history
    RefreshTransactions,
    ScrollUp,
    ScrollDown,

    // Form editing
    FocusField { forward: bool },
    CycleChoice { forward: bool },
    AppendFieldChar(char),
    DeleteFieldChar,
    SubmitForm,

    // Key sequence state
    SetPendingKey(char),
    ClearPendingKey,

    ToggleHelp,

    // System
    Quit,
}

/// A mutating request issued by one of the action forms
#[derive(Debug, Clone, PartialEq)]
pub enum ActionRequest {
    Trade(Trade),
    TrustFund(TrustFund),
    SetLoan(SetLoan),
    BuySpyCard(BuySpyCard),
}

/// Outbound request produced by executing a command
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    FetchTransactions(ListGroupTransactions),
    Submit {
        ticket: FormTicket,
        request: ActionRequest,
    },
}

/// Events from background tasks (responses to requests)
#[derive(Debug, Clone)]
pub enum DataEvent {
    TransactionsLoaded {
        records: Vec<TransactionRecord>,
    },
    TransactionsLoadFailed {
        error: String,
    },

    ActionSucceeded {
        ticket: FormTicket,
        message: String,
    },
    ActionFailed {
        ticket: FormTicket,
        error: String,
    },
}
