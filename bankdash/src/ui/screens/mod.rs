pub mod loan_screen;
pub mod spy_card_screen;
pub mod trade_screen;
pub mod transactions_screen;
pub mod trust_fund_screen;

use crate::state::{
    ActionForm, LoanFormState, SpyCardFormState, Tab, TradeFormState, TransactionsState,
    TrustFundFormState,
};

/// The mounted view. Exactly one exists at a time and it always matches the active tab.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Trade(TradeFormState),
    TrustFund(TrustFundFormState),
    Loan(LoanFormState),
    SpyCard(SpyCardFormState),
    Transactions(TransactionsState),
}

impl Screen {
    /// Fresh screen for `tab` with initial field values
    pub fn mount(tab: Tab) -> Self {
        match tab {
            Tab::Trade => Screen::Trade(TradeFormState::default()),
            Tab::TrustFund => Screen::TrustFund(TrustFundFormState::default()),
            Tab::SetLoan => Screen::Loan(LoanFormState::default()),
            Tab::BuySpyCard => Screen::SpyCard(SpyCardFormState::default()),
            Tab::GroupTransactions => Screen::Transactions(TransactionsState::default()),
        }
    }

    pub fn tab(&self) -> Tab {
        match self {
            Screen::Trade(_) => Tab::Trade,
            Screen::TrustFund(_) => Tab::TrustFund,
            Screen::Loan(_) => Tab::SetLoan,
            Screen::SpyCard(_) => Tab::BuySpyCard,
            Screen::Transactions(_) => Tab::GroupTransactions,
        }
    }

    pub fn form(&self) -> Option<&dyn ActionForm> {
        match self {
            Screen::Trade(form) => Some(form),
            Screen::TrustFund(form) => Some(form),
            Screen::Loan(form) => Some(form),
            Screen::SpyCard(form) => Some(form),
            Screen::Transactions(_) => None,
        }
    }

    pub fn form_mut(&mut self) -> Option<&mut dyn ActionForm> {
        match self {
            Screen::Trade(form) => Some(form),
            Screen::TrustFund(form) => Some(form),
            Screen::Loan(form) => Some(form),
            Screen::SpyCard(form) => Some(form),
            Screen::Transactions(_) => None,
        }
    }
}
