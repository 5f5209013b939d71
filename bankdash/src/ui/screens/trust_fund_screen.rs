use ratatui::{prelude::Rect, Frame};

use crate::state::{ActionForm, FormField, TrustFundFormState};
use crate::ui::{components::action_form, utils};

pub const HEADING: &str = "مدیریت صندوق امانی";

pub fn render(f: &mut Frame, area: Rect, form: &TrustFundFormState) {
    // Fund id only shows up for deletes
    let rows = form
        .fields()
        .into_iter()
        .map(|field| match field {
            FormField::TrustFundAction => action_form::field_row(
                form,
                field,
                Some(utils::trust_fund_action_label(form.action)),
            ),
            _ => action_form::field_row(form, field, None),
        })
        .collect();

    action_form::render_form(f, area, HEADING, rows, "اجرا", &form.feedback);
}
