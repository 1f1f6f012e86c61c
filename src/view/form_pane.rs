//! Form rendering for the membership and contact screens.
//!
//! Each field renders as a label, its current value (with a cursor on
//! the focused field), and the inline error below it when validation
//! failed. The submitting state and the success notice replace the
//! normal footer hint.

use crate::state::{FormKind, FormState};
use crate::view::styles::FaqStyles;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Build the form's lines: fields, inline errors, and footer status.
pub fn build_form_lines(form: &FormState, styles: &FaqStyles) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    if let Some(notice) = form.success_notice() {
        lines.push(Line::from(Span::styled(
            notice.to_string(),
            styles.success.add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::default());
    }

    for (i, field) in form.fields().iter().enumerate() {
        let focused = i == form.focused_index() && !form.is_submitting();
        let label_style = if focused {
            styles.question_open
        } else {
            styles.question
        };
        let suffix = if field.required { " *" } else { "" };
        lines.push(Line::from(Span::styled(
            format!("{}{}", field.id.label(), suffix),
            label_style,
        )));

        let mut value_spans = vec![Span::raw(format!("  {}", field.value))];
        if focused {
            value_spans.push(Span::styled(
                " ".to_string(),
                Style::default().add_modifier(Modifier::REVERSED),
            ));
        }
        let mut value_line = Line::from(value_spans);
        if focused {
            value_line = value_line.style(styles.selected);
        }
        lines.push(value_line);

        if let Some(error) = &field.error {
            lines.push(Line::from(Span::styled(
                format!("  {error}"),
                styles.error,
            )));
        }
        lines.push(Line::default());
    }

    let footer = if form.is_submitting() {
        Span::styled("Submitting...".to_string(), styles.muted)
    } else {
        Span::styled(
            "Tab/Shift+Tab: move between fields   Ctrl+s: submit".to_string(),
            styles.muted,
        )
    };
    lines.push(Line::from(footer));

    lines
}

/// Render a form into the given area.
pub fn render_form(frame: &mut Frame, area: Rect, form: &FormState, styles: &FaqStyles) {
    let title = match form.kind() {
        FormKind::Membership => "Membership Application",
        FormKind::Contact => "Contact Us",
    };
    let paragraph = Paragraph::new(build_form_lines(form, styles))
        .block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(paragraph, area);
}
