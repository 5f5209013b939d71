use ratatui::{prelude::Rect, Frame};

use crate::state::{FormField, LoanFormState};
use crate::ui::components::action_form;

pub const HEADING: &str = "تنظیم وام";

pub fn render(f: &mut Frame, area: Rect, form: &LoanFormState) {
    let rows = vec![
        action_form::field_row(form, FormField::Amount, None),
        action_form::field_row(form, FormField::Duration, None),
    ];

    action_form::render_form(f, area, HEADING, rows, "درخواست", &form.feedback);
}
