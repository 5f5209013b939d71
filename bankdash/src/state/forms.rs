//! Field state for the four action forms.
//!
//! Each form owns its inputs and its feedback line. Numeric inputs are kept as
//! the text the user typed; they are only parsed when the form is submitted.

use bank_api::endpoints::{
    spy_cards::SpyCardType,
    trade::{Resource, TradeType},
    trust_fund::TrustFundAction,
};

/// Every input that appears on an action form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Resource,
    Amount,
    TradeType,
    TrustFundAction,
    FundId,
    Duration,
    SpyCardType,
}

impl FormField {
    /// Choice fields cycle through a fixed set of options, the rest take digits
    pub fn is_choice(&self) -> bool {
        matches!(
            self,
            Self::Resource | Self::TradeType | Self::TrustFundAction | Self::SpyCardType
        )
    }
}

/// Outcome text shown under a form
#[derive(Default, Debug, Clone, PartialEq)]
pub struct FormFeedback {
    /// Result of the last submission, success or failure
    pub message: Option<String>,
    /// Whether `message` reports a failed request
    pub failed: bool,
    /// Set when the inputs were rejected before sending anything
    pub validation_error: Option<String>,
}

pub trait ActionForm {
    /// Visible fields in focus order
    fn fields(&self) -> Vec<FormField>;
    fn focus(&self) -> FormField;
    fn set_focus(&mut self, field: FormField);
    fn label(&self, field: FormField) -> &'static str;
    fn cycle_choice(&mut self, field: FormField, forward: bool);
    fn numeric_input(&self, field: FormField) -> Option<&str>;
    fn numeric_input_mut(&mut self, field: FormField) -> Option<&mut String>;
    fn feedback(&self) -> &FormFeedback;
    fn feedback_mut(&mut self) -> &mut FormFeedback;
    fn success_text(&self, message: &str) -> String;
    fn failure_text(&self, error: &str) -> String;

    fn move_focus(&mut self, forward: bool) {
        let fields = self.fields();
        let current = fields.iter().position(|f| *f == self.focus()).unwrap_or(0);
        let next = if forward {
            (current + 1) % fields.len()
        } else {
            (current + fields.len() - 1) % fields.len()
        };
        self.set_focus(fields[next]);
    }

    fn cycle_focused(&mut self, forward: bool) {
        let field = self.focus();
        self.cycle_choice(field, forward);
    }

    /// Type into the focused numeric input. Accepts digits and a leading minus.
    fn push_char(&mut self, c: char) {
        let field = self.focus();
        if let Some(input) = self.numeric_input_mut(field) {
            if c.is_ascii_digit() || (c == '-' && input.is_empty()) {
                input.push(c);
            }
        }
    }

    fn pop_char(&mut self) {
        let field = self.focus();
        if let Some(input) = self.numeric_input_mut(field) {
            input.pop();
        }
    }
}

/// Step to the neighbouring option, wrapping at both ends
fn cycle<T: Copy + PartialEq>(options: &[T], current: T, forward: bool) -> T {
    let index = options.iter().position(|o| *o == current).unwrap_or(0);
    let next = if forward {
        (index + 1) % options.len()
    } else {
        (index + options.len() - 1) % options.len()
    };
    options[next]
}

#[derive(Debug, Clone, PartialEq)]
pub struct TradeFormState {
    pub focus: FormField,
    pub resource: Resource,
    pub amount: String,
    pub kind: TradeType,
    pub feedback: FormFeedback,
}

impl Default for TradeFormState {
    fn default() -> Self {
        Self {
            focus: FormField::Resource,
            resource: Resource::Oil,
            amount: "0".to_string(),
            kind: TradeType::Buy,
            feedback: FormFeedback::default(),
        }
    }
}

impl ActionForm for TradeFormState {
    fn fields(&self) -> Vec<FormField> {
        vec![FormField::Resource, FormField::Amount, FormField::TradeType]
    }

    fn focus(&self) -> FormField {
        self.focus
    }

    fn set_focus(&mut self, field: FormField) {
        self.focus = field;
    }

    fn label(&self, field: FormField) -> &'static str {
        match field {
            FormField::Resource => "منبع",
            FormField::TradeType => "نوع",
            _ => "مقدار",
        }
    }

    fn cycle_choice(&mut self, field: FormField, forward: bool) {
        match field {
            FormField::Resource => self.resource = cycle(&Resource::ALL, self.resource, forward),
            FormField::TradeType => self.kind = cycle(&TradeType::ALL, self.kind, forward),
            _ => {}
        }
    }

    fn numeric_input(&self, field: FormField) -> Option<&str> {
        (field == FormField::Amount).then_some(self.amount.as_str())
    }

    fn numeric_input_mut(&mut self, field: FormField) -> Option<&mut String> {
        (field == FormField::Amount).then_some(&mut self.amount)
    }

    fn feedback(&self) -> &FormFeedback {
        &self.feedback
    }

    fn feedback_mut(&mut self) -> &mut FormFeedback {
        &mut self.feedback
    }

    fn success_text(&self, message: &str) -> String {
        format!("معامله موفق: {message}")
    }

    fn failure_text(&self, error: &str) -> String {
        format!("خطا در معامله: {error}")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrustFundFormState {
    pub focus: FormField,
    pub action: TrustFundAction,
    pub amount: String,
    pub fund_id: String,
    pub feedback: FormFeedback,
}

impl Default for TrustFundFormState {
    fn default() -> Self {
        Self {
            focus: FormField::TrustFundAction,
            action: TrustFundAction::Add,
            amount: "0".to_string(),
            fund_id: String::new(),
            feedback: FormFeedback::default(),
        }
    }
}

impl ActionForm for TrustFundFormState {
    fn fields(&self) -> Vec<FormField> {
        let mut fields = vec![FormField::TrustFundAction, FormField::Amount];
        // The fund id input only exists while deleting
        if self.action == TrustFundAction::Delete {
            fields.push(FormField::FundId);
        }
        fields
    }

    fn focus(&self) -> FormField {
        self.focus
    }

    fn set_focus(&mut self, field: FormField) {
        self.focus = field;
    }

    fn label(&self, field: FormField) -> &'static str {
        match field {
            FormField::TrustFundAction => "عملیات",
            FormField::FundId => "ID صندوق",
            _ => "مقدار (برای add)",
        }
    }

    fn cycle_choice(&mut self, field: FormField, forward: bool) {
        if field == FormField::TrustFundAction {
            self.action = cycle(&TrustFundAction::ALL, self.action, forward);
        }
    }

    fn numeric_input(&self, field: FormField) -> Option<&str> {
        match field {
            FormField::Amount => Some(&self.amount),
            FormField::FundId => Some(&self.fund_id),
            _ => None,
        }
    }

    fn numeric_input_mut(&mut self, field: FormField) -> Option<&mut String> {
        match field {
            FormField::Amount => Some(&mut self.amount),
            FormField::FundId => Some(&mut self.fund_id),
            _ => None,
        }
    }

    fn feedback(&self) -> &FormFeedback {
        &self.feedback
    }

    fn feedback_mut(&mut self) -> &mut FormFeedback {
        &mut self.feedback
    }

    fn success_text(&self, message: &str) -> String {
        format!("عملیات موفق: {message}")
    }

    fn failure_text(&self, error: &str) -> String {
        format!("خطا: {error}")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoanFormState {
    pub focus: FormField,
    pub amount: String,
    /// Months
    pub duration: String,
    pub feedback: FormFeedback,
}

impl Default for LoanFormState {
    fn default() -> Self {
        Self {
            focus: FormField::Amount,
            amount: "0".to_string(),
            duration: "1".to_string(),
            feedback: FormFeedback::default(),
        }
    }
}

impl ActionForm for LoanFormState {
    fn fields(&self) -> Vec<FormField> {
        vec![FormField::Amount, FormField::Duration]
    }

    fn focus(&self) -> FormField {
        self.focus
    }

    fn set_focus(&mut self, field: FormField) {
        self.focus = field;
    }

    fn label(&self, field: FormField) -> &'static str {
        match field {
            FormField::Duration => "مدت (ماه)",
            _ => "مقدار وام",
        }
    }

    fn cycle_choice(&mut self, _field: FormField, _forward: bool) {}

    fn numeric_input(&self, field: FormField) -> Option<&str> {
        match field {
            FormField::Amount => Some(&self.amount),
            FormField::Duration => Some(&self.duration),
            _ => None,
        }
    }

    fn numeric_input_mut(&mut self, field: FormField) -> Option<&mut String> {
        match field {
            FormField::Amount => Some(&mut self.amount),
            FormField::Duration => Some(&mut self.duration),
            _ => None,
        }
    }

    fn feedback(&self) -> &FormFeedback {
        &self.feedback
    }

    fn feedback_mut(&mut self) -> &mut FormFeedback {
        &mut self.feedback
    }

    fn success_text(&self, message: &str) -> String {
        format!("وام تنظیم شد: {message}")
    }

    fn failure_text(&self, error: &str) -> String {
        format!("خطا: {error}")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpyCardFormState {
    pub focus: FormField,
    pub kind: SpyCardType,
    pub feedback: FormFeedback,
}

impl Default for SpyCardFormState {
    fn default() -> Self {
        Self {
            focus: FormField::SpyCardType,
            kind: SpyCardType::Information,
            feedback: FormFeedback::default(),
        }
    }
}

impl ActionForm for SpyCardFormState {
    fn fields(&self) -> Vec<FormField> {
        vec![FormField::SpyCardType]
    }

    fn focus(&self) -> FormField {
        self.focus
    }

    fn set_focus(&mut self, field: FormField) {
        self.focus = field;
    }

    fn label(&self, _field: FormField) -> &'static str {
        "نوع کارت"
    }

    fn cycle_choice(&mut self, field: FormField, forward: bool) {
        if field == FormField::SpyCardType {
            self.kind = cycle(&SpyCardType::ALL, self.kind, forward);
        }
    }

    fn numeric_input(&self, _field: FormField) -> Option<&str> {
        None
    }

    fn numeric_input_mut(&mut self, _field: FormField) -> Option<&mut String> {
        None
    }

    fn feedback(&self) -> &FormFeedback {
        &self.feedback
    }

    fn feedback_mut(&mut self) -> &mut FormFeedback {
        &mut self.feedback
    }

    fn success_text(&self, message: &str) -> String {
        format!("کارت خریداری شد: {message}")
    }

    fn failure_text(&self, error: &str) -> String {
        format!("خطا: {error}")
    }
}
