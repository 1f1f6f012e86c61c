//! Layout rendering tests against a TestBackend.

use super::*;
use crate::model::{CategoryToken, Deck, FaqEntry, Slide};
use crate::state::AUTO_ADVANCE_INTERVAL;
use crate::view::styles::{ColorConfig, FaqStyles};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::time::Instant;

fn entry(idx: usize, q: &str, a: &str, cat: &str) -> FaqEntry {
    FaqEntry::new(idx, q, a, Some(CategoryToken::new(cat))).unwrap()
}

fn sample_state() -> AppState {
    let deck = Deck::new(
        "Programming Club",
        vec![
            entry(0, "How do I join?", "Come to a meeting.", "general"),
            entry(1, "When are meetings?", "Thursdays.", "events"),
        ],
        vec![Slide {
            title: "Welcome".to_string(),
            body: "Hack nights every Friday.".to_string(),
        }],
    );
    AppState::new(deck, AUTO_ADVANCE_INTERVAL, Instant::now())
}

fn styles() -> FaqStyles {
    FaqStyles::new(ColorConfig::with_enabled(false))
}

fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let area = *buffer.area();
    let mut text = String::new();
    for y in 0..area.height {
        for x in 0..area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

#[test]
fn faq_screen_renders_title_and_questions() {
    let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
    let mut state = sample_state();
    let styles = styles();

    terminal
        .draw(|frame| {
            render_layout(frame, &mut state, &styles);
        })
        .unwrap();

    let text = buffer_text(&terminal);
    assert!(text.contains("Programming Club"));
    assert!(text.contains("How do I join?"));
    assert!(text.contains("When are meetings?"));
}

#[test]
fn faq_screen_returns_list_geometry() {
    let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
    let mut state = sample_state();
    let styles = styles();
    let mut geometry = ViewGeometry::default();

    terminal
        .draw(|frame| {
            geometry = render_layout(frame, &mut state, &styles);
        })
        .unwrap();

    assert!(geometry.faq_list_area.is_some());
    assert!(geometry.faq_listing.is_some());
    assert!(geometry.slideshow_area.is_none());
}

#[test]
fn category_bar_shows_all_sentinel_first() {
    let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
    let mut state = sample_state();
    let styles = styles();

    terminal
        .draw(|frame| {
            render_layout(frame, &mut state, &styles);
        })
        .unwrap();

    let text = buffer_text(&terminal);
    assert!(text.contains("[all] [general] [events]"));
}

#[test]
fn search_results_render_count_and_notice() {
    let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
    let mut state = sample_state();
    state.run_search("zzzz");
    let styles = styles();

    terminal
        .draw(|frame| {
            render_layout(frame, &mut state, &styles);
        })
        .unwrap();

    let text = buffer_text(&terminal);
    assert!(text.contains("0 results found"));
    assert!(text.contains("No FAQs found matching your search."));
}

#[test]
fn membership_screen_renders_fields() {
    let mut terminal = Terminal::new(TestBackend::new(60, 30)).unwrap();
    let mut state = sample_state();
    state.screen = Screen::Membership;
    let styles = styles();

    terminal
        .draw(|frame| {
            render_layout(frame, &mut state, &styles);
        })
        .unwrap();

    let text = buffer_text(&terminal);
    assert!(text.contains("Membership Application"));
    assert!(text.contains("Full name *"));
    assert!(text.contains("Student ID *"));
}

#[test]
fn slides_screen_renders_slide_and_geometry() {
    let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
    let mut state = sample_state();
    state.screen = Screen::Slides;
    let styles = styles();
    let mut geometry = ViewGeometry::default();

    terminal
        .draw(|frame| {
            geometry = render_layout(frame, &mut state, &styles);
        })
        .unwrap();

    let text = buffer_text(&terminal);
    assert!(text.contains("Welcome"));
    assert!(text.contains("1 / 1"));
    assert!(geometry.slideshow_area.is_some());
}

#[test]
fn slides_screen_without_slides_shows_placeholder() {
    let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
    let deck = Deck::new("T", vec![entry(0, "Q", "A", "general")], vec![]);
    let mut state = AppState::new(deck, AUTO_ADVANCE_INTERVAL, Instant::now());
    state.screen = Screen::Slides;
    let styles = styles();

    terminal
        .draw(|frame| {
            render_layout(frame, &mut state, &styles);
        })
        .unwrap();

    let text = buffer_text(&terminal);
    assert!(text.contains("No announcements available."));
}

#[test]
fn status_bar_shows_status_message() {
    let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
    let mut state = sample_state();
    state.status = Some("Exported FAQ data".to_string());
    let styles = styles();

    terminal
        .draw(|frame| {
            render_layout(frame, &mut state, &styles);
        })
        .unwrap();

    assert!(buffer_text(&terminal).contains("Exported FAQ data"));
}
