use ratatui::{prelude::Rect, Frame};

use crate::state::{FormField, SpyCardFormState};
use crate::ui::{components::action_form, utils};

pub const HEADING: &str = "خرید کارت جاسوسی";

pub fn render(f: &mut Frame, area: Rect, form: &SpyCardFormState) {
    let rows = vec![action_form::field_row(
        form,
        FormField::SpyCardType,
        Some(utils::spy_card_label(form.kind)),
    )];

    action_form::render_form(f, area, HEADING, rows, "خرید", &form.feedback);
}
