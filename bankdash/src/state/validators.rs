use super::{
    ActionForm, FormField, LoanFormState, SpyCardFormState, TradeFormState, TrustFundFormState,
};
use crate::events::ActionRequest;
use crate::ui::screens::Screen;
use bank_api::endpoints::{
    loans::SetLoan, spy_cards::BuySpyCard, trade::Trade, trust_fund::TrustFund,
    trust_fund::TrustFundAction, GroupId,
};
use bank_api::repositories::GroupRepository;
use bank_api::Request;

/// Shown when a required input is empty
pub const REQUIRED_MESSAGE: &str = "Please fill out this field.";

/// Shown when an input does not hold a whole number
pub const NOT_A_NUMBER_MESSAGE: &str = "Please enter a number.";

/// An input rejected before anything was sent
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub field: FormField,
    pub message: String,
}

impl ValidationError {
    fn new(form: &dyn ActionForm, field: FormField, reason: &str) -> Self {
        Self {
            field,
            message: format!("{}: {}", form.label(field), reason),
        }
    }
}

fn optional_number(form: &dyn ActionForm, field: FormField) -> Result<Option<i64>, ValidationError> {
    let input = form.numeric_input(field).unwrap_or_default().trim();
    if input.is_empty() {
        return Ok(None);
    }
    input
        .parse::<i64>()
        .map(Some)
        .map_err(|_| ValidationError::new(form, field, NOT_A_NUMBER_MESSAGE))
}

fn required_number(form: &dyn ActionForm, field: FormField) -> Result<i64, ValidationError> {
    optional_number(form, field)?.ok_or_else(|| ValidationError::new(form, field, REQUIRED_MESSAGE))
}

pub fn build_trade(form: &TradeFormState, group: GroupRepository) -> Result<Trade, ValidationError> {
    let amount = required_number(form, FormField::Amount)?;
    Ok(group.trade(form.resource, amount).kind(form.kind))
}

/// The amount may be left empty (sent as 0); the fund id is required only for deletes
pub fn build_trust_fund(
    form: &TrustFundFormState,
    group: GroupRepository,
) -> Result<TrustFund, ValidationError> {
    let amount = optional_number(form, FormField::Amount)?.unwrap_or(0);
    let request = group.trust_fund(form.action, amount);

    match form.action {
        TrustFundAction::Add => Ok(request),
        TrustFundAction::Delete => {
            let fund_id = required_number(form, FormField::FundId)?;
            Ok(request.fund_id(fund_id))
        }
    }
}

pub fn build_loan(form: &LoanFormState, group: GroupRepository) -> Result<SetLoan, ValidationError> {
    let amount = required_number(form, FormField::Amount)?;
    let duration = required_number(form, FormField::Duration)?;
    Ok(group.set_loan(amount, duration))
}

pub fn build_spy_card(form: &SpyCardFormState, group: GroupRepository) -> BuySpyCard {
    group.buy_spy_card(form.kind)
}

/// Build the request for the form shown on `screen`.
/// Returns `None` when the screen has no form.
pub fn build_action_request(
    screen: &Screen,
    group_id: GroupId,
) -> Option<Result<ActionRequest, ValidationError>> {
    let group = Request::group(group_id);
    let request = match screen {
        Screen::Trade(form) => build_trade(form, group).map(ActionRequest::Trade),
        Screen::TrustFund(form) => build_trust_fund(form, group).map(ActionRequest::TrustFund),
        Screen::Loan(form) => build_loan(form, group).map(ActionRequest::SetLoan),
        Screen::SpyCard(form) => Ok(ActionRequest::BuySpyCard(build_spy_card(form, group))),
        Screen::Transactions(_) => return None,
    };
    Some(request)
}
