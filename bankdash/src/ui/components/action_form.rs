//! Shared layout for the four action forms.
//!
//! Fields are listed top to bottom, followed by the submit label and the
//! message line. A validation error takes the message line's place until the
//! inputs change.

use ratatui::prelude::Rect;
use ratatui::{
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::state::{ActionForm, FormFeedback, FormField};
use crate::ui::theme;

/// One rendered input
pub struct FieldRow {
    pub label: &'static str,
    pub value: String,
    pub focused: bool,
    pub choice: bool,
}

/// Row for `field`, using the form's label and focus. Numeric fields show what was typed.
pub fn field_row(form: &dyn ActionForm, field: FormField, choice_label: Option<&str>) -> FieldRow {
    let value = match choice_label {
        Some(label) => label.to_string(),
        None => form.numeric_input(field).unwrap_or_default().to_string(),
    };
    FieldRow {
        label: form.label(field),
        value,
        focused: form.focus() == field,
        choice: field.is_choice(),
    }
}

pub fn render_form(
    f: &mut Frame,
    area: Rect,
    heading: &str,
    rows: Vec<FieldRow>,
    submit_label: &str,
    feedback: &FormFeedback,
) {
    let mut lines: Vec<Line> = Vec::with_capacity(rows.len() + 4);

    for row in rows {
        let value = if row.choice {
            format!("◀ {} ▶", row.value)
        } else if row.focused {
            format!("{}▏", row.value)
        } else {
            row.value
        };
        let style = if row.focused {
            theme::form_field_focused_style()
        } else {
            theme::form_field_style()
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{}: ", row.label), theme::header_style()),
            Span::styled(value, style),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("[ {} ] (Enter)", submit_label),
        theme::title_style(),
    )));
    lines.push(Line::from(""));

    if let Some(error) = &feedback.validation_error {
        lines.push(Line::from(Span::styled(
            error.clone(),
            theme::message_style(true),
        )));
    } else if let Some(message) = &feedback.message {
        lines.push(Line::from(Span::styled(
            message.clone(),
            theme::message_style(feedback.failed),
        )));
    }

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(heading));

    f.render_widget(paragraph, area);
}
