use ratatui::{prelude::Rect, Frame};

use crate::state::{FormField, TradeFormState};
use crate::ui::{components::action_form, utils};

pub const HEADING: &str = "معامله منابع";

pub fn render(f: &mut Frame, area: Rect, form: &TradeFormState) {
    let rows = vec![
        action_form::field_row(
            form,
            FormField::Resource,
            Some(utils::resource_label(form.resource)),
        ),
        action_form::field_row(form, FormField::Amount, None),
        action_form::field_row(
            form,
            FormField::TradeType,
            Some(utils::trade_type_label(form.kind)),
        ),
    ];

    action_form::render_form(f, area, HEADING, rows, "اجرا", &form.feedback);
}
