//! End-to-end user journeys over a TestBackend.
//!
//! Drives the real `TuiApp` through key events and timer ticks, then
//! asserts on the rendered buffer and the resulting state.

use clubtui::model::{CategoryToken, Deck, FaqEntry, Slide};
use clubtui::state::{DEBOUNCE_QUIET, SUBMIT_DELAY};
use clubtui::view::{CliArgs, TuiApp};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::time::Instant;

fn entry(idx: usize, q: &str, a: &str, cat: &str) -> FaqEntry {
    FaqEntry::new(idx, q, a, Some(CategoryToken::new(cat))).unwrap()
}

fn sample_deck() -> Deck {
    Deck::new(
        "Programming Club",
        vec![
            entry(0, "How do I join the club?", "Come to any meeting.", "general"),
            entry(1, "When are meetings held?", "Thursdays at 6pm.", "events"),
            entry(2, "Do I need prior experience?", "No, beginners welcome.", "general"),
            entry(3, "Is there a membership fee?", "No, membership is free.", "general"),
        ],
        vec![Slide {
            title: "Welcome Week".to_string(),
            body: "Kickoff meeting Thursday.".to_string(),
        }],
    )
}

fn app() -> TuiApp<TestBackend> {
    let terminal = Terminal::new(TestBackend::new(70, 28)).unwrap();
    let mut app = TuiApp::with_terminal(
        terminal,
        sample_deck(),
        CliArgs {
            search: None,
            category: None,
            no_color: true,
            slide_interval_secs: 5,
            export_dir: std::env::temp_dir(),
        },
    );
    app.draw().unwrap();
    app
}

fn press(app: &mut TuiApp<TestBackend>, code: KeyCode, now: Instant) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE), now);
    app.draw().unwrap();
}

fn type_str(app: &mut TuiApp<TestBackend>, text: &str, now: Instant) {
    for ch in text.chars() {
        app.handle_key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE), now);
    }
    app.draw().unwrap();
}

fn screen_text(app: &mut TuiApp<TestBackend>) -> String {
    let buffer = app.terminal_mut().backend().buffer().clone();
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
fn search_journey_filters_highlights_and_clears() {
    let mut app = app();
    let now = Instant::now();

    press(&mut app, KeyCode::Char('/'), now);
    type_str(&mut app, "meeting", now);

    // Debounce elapses; the search runs on the next tick
    app.state_mut().tick(now + DEBOUNCE_QUIET);
    app.draw().unwrap();

    let text = screen_text(&mut app);
    assert!(text.contains("2 results found"));
    assert!(text.contains("How do I join the club?"));
    assert!(!text.contains("Is there a membership fee?"));

    // Esc restores everything
    press(&mut app, KeyCode::Esc, now);
    let text = screen_text(&mut app);
    assert!(text.contains("Is there a membership fee?"));
}

#[test]
fn no_results_notice_appears_for_hopeless_terms() {
    let mut app = app();
    let now = Instant::now();

    press(&mut app, KeyCode::Char('/'), now);
    type_str(&mut app, "quantum chromodynamics", now);
    press(&mut app, KeyCode::Enter, now);

    let text = screen_text(&mut app);
    assert!(text.contains("0 results found"));
    assert!(text.contains("No FAQs found matching your search."));
}

#[test]
fn category_cycling_hides_other_categories() {
    let mut app = app();
    let now = Instant::now();

    // all → general
    press(&mut app, KeyCode::Char(']'), now);
    let text = screen_text(&mut app);
    assert!(text.contains("How do I join the club?"));
    assert!(!text.contains("When are meetings held?"));

    // general → events
    press(&mut app, KeyCode::Char(']'), now);
    let text = screen_text(&mut app);
    assert!(text.contains("When are meetings held?"));
    assert!(!text.contains("How do I join the club?"));
}

#[test]
fn accordion_journey_opens_one_at_a_time() {
    let mut app = app();
    let now = Instant::now();

    press(&mut app, KeyCode::Enter, now);
    let text = screen_text(&mut app);
    assert!(text.contains("Come to any meeting."));

    press(&mut app, KeyCode::Char('j'), now);
    press(&mut app, KeyCode::Enter, now);
    let text = screen_text(&mut app);
    assert!(text.contains("Thursdays at 6pm."));
    assert!(
        !text.contains("Come to any meeting."),
        "opening the second entry must close the first"
    );
}

#[test]
fn expand_all_shows_every_answer() {
    let mut app = app();
    let now = Instant::now();

    app.handle_key(KeyEvent::new(KeyCode::Char('E'), KeyModifiers::SHIFT), now);
    app.draw().unwrap();
    let text = screen_text(&mut app);
    assert!(text.contains("Come to any meeting."));
    assert!(text.contains("Thursdays at 6pm."));
    assert!(text.contains("No, beginners welcome."));

    app.handle_key(KeyEvent::new(KeyCode::Char('C'), KeyModifiers::SHIFT), now);
    app.draw().unwrap();
    let text = screen_text(&mut app);
    assert!(!text.contains("Come to any meeting."));
}

#[test]
fn contact_form_journey_submits_and_resets() {
    let mut app = app();
    let now = Instant::now();

    press(&mut app, KeyCode::Char('3'), now);
    type_str(&mut app, "Ada Lovelace", now);
    press(&mut app, KeyCode::Tab, now);
    type_str(&mut app, "ada@example.com", now);
    press(&mut app, KeyCode::Tab, now);
    type_str(&mut app, "Joining the club", now);
    press(&mut app, KeyCode::Tab, now);
    type_str(&mut app, "I would like to join the programming club.", now);

    app.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL), now);
    app.draw().unwrap();
    assert!(screen_text(&mut app).contains("Submitting..."));

    // Simulated submission completes
    app.state_mut().tick(now + SUBMIT_DELAY);
    app.draw().unwrap();
    let text = screen_text(&mut app);
    assert!(text.contains("Thank you! Your message has been sent successfully."));
    assert!(app.state().contact.fields().iter().all(|f| f.value.is_empty()));
}

#[test]
fn invalid_form_shows_inline_errors_and_does_not_submit() {
    let mut app = app();
    let now = Instant::now();

    press(&mut app, KeyCode::Char('3'), now);
    type_str(&mut app, "Ada", now);
    press(&mut app, KeyCode::Tab, now);
    type_str(&mut app, "not-an-email", now);

    app.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL), now);
    app.draw().unwrap();

    let text = screen_text(&mut app);
    assert!(text.contains("Please enter a valid email address"));
    assert!(text.contains("This field is required"));
    assert!(!app.state().contact.is_submitting());
}

#[test]
fn slideshow_auto_advances_on_tick() {
    let terminal = Terminal::new(TestBackend::new(70, 28)).unwrap();
    let deck = Deck::new(
        "Club",
        vec![entry(0, "Q", "A", "general")],
        vec![
            Slide {
                title: "One".to_string(),
                body: String::new(),
            },
            Slide {
                title: "Two".to_string(),
                body: String::new(),
            },
        ],
    );
    let mut app = TuiApp::with_terminal(
        terminal,
        deck,
        CliArgs {
            search: None,
            category: None,
            no_color: true,
            slide_interval_secs: 5,
            export_dir: std::env::temp_dir(),
        },
    );
    let now = Instant::now();
    app.draw().unwrap();
    press(&mut app, KeyCode::Char('4'), now);
    assert!(screen_text(&mut app).contains("One"));

    app.state_mut().tick(now + std::time::Duration::from_secs(5));
    app.draw().unwrap();
    let text = screen_text(&mut app);
    assert!(text.contains("Two"));
    assert!(text.contains("2 / 2"));
}

#[test]
fn help_overlay_renders_over_content() {
    let mut app = app();
    press(&mut app, KeyCode::Char('?'), Instant::now());
    assert!(screen_text(&mut app).contains("Keyboard Shortcuts"));
}
