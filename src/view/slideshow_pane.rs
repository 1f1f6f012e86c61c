//! Announcements slideshow pane.
//!
//! One slide at a time with a dot indicator row, position counter, and
//! a paused marker while auto-advance is suspended. The dot row is
//! pinned above the counter at the bottom of the pane so clicks on it
//! can be hit-tested without knowing how the body wrapped.

use crate::model::Slide;
use crate::state::SlideshowState;
use crate::view::styles::FaqStyles;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Build the dot indicator row, one dot per slide with the current one
/// filled.
pub fn build_dots(show: &SlideshowState) -> Line<'static> {
    let mut spans = Vec::with_capacity(show.len() * 2);
    for i in 0..show.len() {
        let dot = if i == show.current() { "●" } else { "○" };
        spans.push(Span::raw(dot.to_string()));
        if i + 1 < show.len() {
            spans.push(Span::raw(" ".to_string()));
        }
    }
    Line::from(spans)
}

/// Render the slideshow into the given area.
pub fn render_slideshow(
    frame: &mut Frame,
    area: Rect,
    show: &SlideshowState,
    slides: &[Slide],
    styles: &FaqStyles,
) {
    let block = Block::default().borders(Borders::ALL).title("Announcements");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    let slide = &slides[show.current()];
    let mut lines = vec![
        Line::from(Span::styled(
            slide.title.clone(),
            styles.question_open.add_modifier(Modifier::UNDERLINED),
        )),
        Line::default(),
    ];
    for body_line in slide.body.lines() {
        lines.push(Line::from(body_line.to_string()));
    }
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }),
        chunks[0],
    );

    frame.render_widget(
        Paragraph::new(build_dots(show)).alignment(Alignment::Center),
        chunks[1],
    );

    let mut status = format!("{} / {}", show.current() + 1, show.len());
    if show.is_paused() {
        status.push_str("  (paused)");
    }
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(status, styles.muted)))
            .alignment(Alignment::Center),
        chunks[2],
    );
}

/// Slide index of the dot under the given position, if it falls on the
/// indicator row. `area` is the full bordered slideshow area.
pub fn dot_at(area: Rect, len: usize, column: u16, row: u16) -> Option<usize> {
    if len == 0 || area.height < 4 || area.width < 3 {
        return None;
    }
    // Bottom border, counter row, then the dot row
    let dots_row = area.y + area.height - 3;
    if row != dots_row {
        return None;
    }
    let inner_width = area.width - 2;
    let dots_width = (2 * len - 1) as u16;
    if dots_width > inner_width {
        return None;
    }
    let start = area.x + 1 + (inner_width - dots_width) / 2;
    if column < start || column >= start + dots_width {
        return None;
    }
    let offset = (column - start) as usize;
    // Odd offsets land on the gap between dots
    if offset % 2 == 1 {
        return None;
    }
    Some(offset / 2)
}
