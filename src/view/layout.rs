//! Screen layout rendering.
//!
//! Splits the frame into header, screen content, and status bar, then
//! dispatches to the active screen's pane. Returns the geometry the
//! event loop needs for mouse hit-testing.

use crate::state::{AppState, Screen, SearchState};
use crate::view::constants::{
    CATEGORY_BAR_HEIGHT, HEADER_HEIGHT, NOTICES_HEIGHT, SEARCH_INPUT_HEIGHT, STATUS_BAR_HEIGHT,
};
use crate::view::faq_pane::{self, FaqListing};
use crate::view::form_pane;
use crate::view::search_input::SearchInput;
use crate::view::slideshow_pane;
use crate::view::styles::FaqStyles;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Areas and line models produced by the last render, for mouse
/// hit-testing in the event loop.
#[derive(Default)]
pub struct ViewGeometry {
    /// Inner area of the FAQ list (inside its border), when shown.
    pub faq_list_area: Option<Rect>,
    /// Line model matching `faq_list_area`.
    pub faq_listing: Option<FaqListing>,
    /// Slideshow area, when shown. Drives hover pause and click hit-testing.
    pub slideshow_area: Option<Rect>,
}

/// Render the whole frame for the current state.
pub fn render_layout(frame: &mut Frame, state: &mut AppState, styles: &FaqStyles) -> ViewGeometry {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(frame.area());

    render_header(frame, vertical_chunks[0], state, styles);
    let geometry = render_screen(frame, vertical_chunks[1], state, styles);
    render_status_bar(frame, vertical_chunks[2], state, styles);

    geometry
}

fn render_screen(
    frame: &mut Frame,
    area: Rect,
    state: &mut AppState,
    styles: &FaqStyles,
) -> ViewGeometry {
    match state.screen {
        Screen::Faq => render_faq_screen(frame, area, state, styles),
        Screen::Membership => {
            form_pane::render_form(frame, area, &state.membership, styles);
            ViewGeometry::default()
        }
        Screen::Contact => {
            form_pane::render_form(frame, area, &state.contact, styles);
            ViewGeometry::default()
        }
        Screen::Slides => render_slides_screen(frame, area, state, styles),
    }
}

fn render_faq_screen(
    frame: &mut Frame,
    area: Rect,
    state: &mut AppState,
    styles: &FaqStyles,
) -> ViewGeometry {
    let has_categories = !state.category_controls().is_empty();
    let search_visible = !matches!(state.search, SearchState::Inactive);
    let notices_visible = state
        .notices
        .as_ref()
        .is_some_and(|n| n.results_count.is_some() || n.no_results);

    let mut constraints = Vec::new();
    if has_categories {
        constraints.push(Constraint::Length(CATEGORY_BAR_HEIGHT));
    }
    if search_visible {
        constraints.push(Constraint::Length(SEARCH_INPUT_HEIGHT));
    }
    if notices_visible {
        constraints.push(Constraint::Length(NOTICES_HEIGHT));
    }
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let mut next = 0;
    if has_categories {
        render_category_bar(frame, chunks[next], state, styles);
        next += 1;
    }
    if search_visible {
        frame.render_widget(SearchInput::new(&state.search), chunks[next]);
        next += 1;
    }
    if notices_visible {
        render_notices(frame, chunks[next], state, styles);
        next += 1;
    }
    let list_area = chunks[next];

    // Text width inside the list border
    let text_width = list_area.width.saturating_sub(2);
    let listing = faq_pane::build_faq_listing(state, styles, text_width);

    // Viewport height inside the border
    let viewport = list_area.height.saturating_sub(2) as usize;
    if let Some(index) = state.take_pending_reveal() {
        state.scroll_offset = faq_pane::scroll_to_entry(&listing, state.scroll_offset, viewport, index);
    }
    let max_offset = listing.lines.len().saturating_sub(viewport);
    state.scroll_offset = state.scroll_offset.min(max_offset);

    faq_pane::render_faq_list(frame, list_area, &listing, state.scroll_offset);

    let inner = Rect {
        x: list_area.x + 1,
        y: list_area.y + 1,
        width: list_area.width.saturating_sub(2),
        height: list_area.height.saturating_sub(2),
    };
    ViewGeometry {
        faq_list_area: Some(inner),
        faq_listing: Some(listing),
        slideshow_area: None,
    }
}

fn render_slides_screen(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    styles: &FaqStyles,
) -> ViewGeometry {
    match &state.slideshow {
        Some(show) => {
            slideshow_pane::render_slideshow(frame, area, show, state.deck().slides(), styles);
            ViewGeometry {
                slideshow_area: Some(area),
                ..ViewGeometry::default()
            }
        }
        None => {
            let paragraph = Paragraph::new(Line::from(Span::styled(
                "No announcements available.",
                styles.muted,
            )));
            frame.render_widget(paragraph, area);
            ViewGeometry::default()
        }
    }
}

fn render_header(frame: &mut Frame, area: Rect, state: &AppState, styles: &FaqStyles) {
    let stats = state.stats();
    let title = if state.deck().title().is_empty() {
        "Programming Club".to_string()
    } else {
        state.deck().title().to_string()
    };
    let line = Line::from(vec![
        Span::styled(title, styles.question_open),
        Span::styled(
            format!("   {} FAQs, {} open", stats.total, stats.open),
            styles.muted,
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_category_bar(frame: &mut Frame, area: Rect, state: &AppState, styles: &FaqStyles) {
    let mut spans = Vec::new();
    for token in state.category_controls() {
        let active = &token == state.category.selected();
        let style = if active {
            styles.category_active
        } else {
            styles.category_inactive
        };
        spans.push(Span::styled(format!("[{}] ", token.as_str()), style));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_notices(frame: &mut Frame, area: Rect, state: &AppState, styles: &FaqStyles) {
    let Some(notices) = &state.notices else {
        return;
    };
    let mut spans = Vec::new();
    if let Some(count) = &notices.results_count {
        spans.push(Span::styled(count.clone(), styles.muted));
    }
    if notices.no_results {
        spans.push(Span::styled(
            "   No FAQs found matching your search.".to_string(),
            styles.error,
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, styles: &FaqStyles) {
    let line = match &state.status {
        Some(message) => Line::from(Span::styled(message.clone(), styles.success)),
        None => Line::from(Span::styled(
            "1 FAQ  2 Membership  3 Contact  4 Announcements  ? Help  q Quit",
            styles.muted,
        )),
    };
    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
