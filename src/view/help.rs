//! Help overlay widget displaying keyboard shortcuts.
//!
//! Centered modal overlay with shortcuts grouped by category.
//! Triggered by '?', dismissed by 'Esc' or '?'.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the help overlay centered on the screen.
pub fn render_help_overlay(frame: &mut Frame) {
    let area = frame.area();
    let popup_area = centered_rect(HELP_POPUP_WIDTH_PERCENT, HELP_POPUP_HEIGHT_PERCENT, area);

    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(build_help_content())
        .block(
            Block::default()
                .title(" Keyboard Shortcuts ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);

    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: 1,
    };
    let hint = Paragraph::new(Line::from(Span::styled(
        " Press Esc or ? to close ",
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(hint, hint_area);
}

/// Calculate the centered rect for the help overlay.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_width = area.width * percent_x / 100;
    let popup_height = area.height * percent_y / 100;
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x: area.x + popup_x,
        y: area.y + popup_y,
        width: popup_width,
        height: popup_height,
    }
}

/// Build the help content lines grouped by category.
fn build_help_content() -> Vec<Line<'static>> {
    let category_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let shortcut = |key: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {key:<14}"), key_style),
            Span::raw(desc),
        ])
    };

    vec![
        Line::from(Span::styled("FAQ", category_style)),
        shortcut("j / ↓", "Select next entry"),
        shortcut("k / ↑", "Select previous entry"),
        shortcut("Enter / Space", "Toggle selected entry"),
        shortcut("E", "Expand all entries"),
        shortcut("C", "Collapse all entries"),
        Line::default(),
        Line::from(Span::styled("Search & Filter", category_style)),
        shortcut("/ or Ctrl+f", "Search FAQs"),
        shortcut("Esc", "Cancel search"),
        shortcut("x", "Clear active search"),
        shortcut("] / [", "Next / previous category"),
        Line::default(),
        Line::from(Span::styled("Screens", category_style)),
        shortcut("1", "FAQ"),
        shortcut("2", "Membership application"),
        shortcut("3", "Contact"),
        shortcut("4", "Announcements"),
        Line::default(),
        Line::from(Span::styled("Forms", category_style)),
        shortcut("Tab / Shift+Tab", "Next / previous field"),
        shortcut("Ctrl+s", "Submit form"),
        Line::default(),
        Line::from(Span::styled("Slideshow", category_style)),
        shortcut("→ / l", "Next slide"),
        shortcut("← / h", "Previous slide"),
        Line::default(),
        Line::from(Span::styled("Application", category_style)),
        shortcut("e", "Export FAQ data"),
        shortcut("?", "Toggle this help"),
        shortcut("q / Ctrl+c", "Quit"),
    ]
}
