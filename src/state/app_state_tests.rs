use super::*;
use crate::model::{FaqEntry, Slide};
use crate::state::slideshow::AUTO_ADVANCE_INTERVAL;

fn entry(idx: usize, q: &str, a: &str, cat: Option<&str>) -> FaqEntry {
    FaqEntry::new(idx, q, a, cat.map(CategoryToken::new)).unwrap()
}

fn sample_deck() -> Deck {
    Deck::new(
        "Programming Club",
        vec![
            entry(0, "How do I join the club?", "Come to a meeting.", Some("general")),
            entry(1, "When are meetings?", "Thursdays at 6pm.", Some("events")),
            entry(2, "Do I need experience?", "No, beginners welcome.", Some("general")),
            entry(3, "Where do meetings happen?", "Room 204.", Some("events")),
        ],
        vec![
            Slide {
                title: "Welcome".to_string(),
                body: String::new(),
            },
            Slide {
                title: "Hack nights".to_string(),
                body: String::new(),
            },
        ],
    )
}

fn app() -> (AppState, Instant) {
    let now = Instant::now();
    (AppState::new(sample_deck(), AUTO_ADVANCE_INTERVAL, now), now)
}

#[test]
fn toggle_produces_analytics_event() {
    let (mut app, now) = app();
    let event = app.toggle_selected(now).unwrap();
    assert_eq!(event.name, "faq_interaction");
    assert_eq!(event.label, "How do I join the club?");
    assert_eq!(event.value, 1);

    let event = app.toggle_selected(now).unwrap();
    assert_eq!(event.value, 0);
}

#[test]
fn opening_one_entry_closes_the_others() {
    let (mut app, now) = app();
    app.toggle_selected(now);
    app.select_next();
    app.toggle_selected(now);
    let stats = app.stats();
    assert_eq!(stats.open, 1);
    assert_eq!(stats.closed, 3);
}

#[test]
fn search_hides_non_matching_and_counts_results() {
    let (mut app, _) = app();
    app.run_search("meeting");
    assert_eq!(app.visibility.visible_count(), 3);
    let notices = app.notices.as_ref().unwrap();
    assert_eq!(notices.results_count.as_deref(), Some("3 results found"));
    assert!(!notices.no_results);
}

#[test]
fn search_collapses_open_entries() {
    let (mut app, now) = app();
    app.toggle_selected(now);
    assert_eq!(app.stats().open, 1);
    app.run_search("meetings");
    assert_eq!(app.stats().open, 0);
}

#[test]
fn blank_search_clears_instead() {
    let (mut app, _) = app();
    app.run_search("meeting");
    app.run_search("   ");
    assert!(matches!(app.search, SearchState::Inactive));
    assert_eq!(app.visibility.visible_count(), 4);
    let notices = app.notices.as_ref().unwrap();
    assert!(notices.results_count.is_none());
    assert!(!notices.no_results);
}

#[test]
fn no_results_notice_appears_lazily() {
    let (mut app, _) = app();
    assert!(app.notices.is_none());
    app.run_search("zzzz");
    let notices = app.notices.as_ref().unwrap();
    assert!(notices.no_results);
    assert_eq!(notices.results_count.as_deref(), Some("0 results found"));
}

#[test]
fn singular_result_label() {
    let (mut app, _) = app();
    app.run_search("room 204");
    assert_eq!(
        app.notices.as_ref().unwrap().results_count.as_deref(),
        Some("1 result found")
    );
}

#[test]
fn debounce_defers_search_until_quiet() {
    let (mut app, now) = app();
    app.schedule_search("meet".to_string(), now);
    assert!(app.search_pending());
    assert!(!app.tick(now + Duration::from_millis(100)));
    assert!(matches!(app.search, SearchState::Inactive));

    // Another keystroke restarts the quiet period
    let t1 = now + Duration::from_millis(200);
    app.schedule_search("meeting".to_string(), t1);
    assert!(!app.tick(now + DEBOUNCE_QUIET));
    assert!(app.tick(t1 + DEBOUNCE_QUIET));
    assert!(matches!(app.search, SearchState::Active { .. }));
    assert!(!app.search_pending());
}

#[test]
fn category_filter_composes_with_search() {
    let (mut app, _) = app();
    app.run_search("meeting");
    app.filter_by_category(CategoryToken::new("events"));
    // "meeting" matches entries 0, 1, 3; events holds 1 and 3
    assert_eq!(app.visibility.visible_indices(), vec![1, 3]);

    // Clearing the search keeps the category restriction
    app.clear_search();
    assert_eq!(app.visibility.visible_indices(), vec![1, 3]);
}

#[test]
fn category_filter_refreshes_the_results_count() {
    let (mut app, _) = app();
    app.run_search("meeting");
    assert_eq!(
        app.notices.as_ref().unwrap().results_count.as_deref(),
        Some("3 results found")
    );

    // Narrowing by category must recount the composed visibility
    app.filter_by_category(CategoryToken::new("events"));
    assert_eq!(app.visibility.visible_count(), 2);
    assert_eq!(
        app.notices.as_ref().unwrap().results_count.as_deref(),
        Some("2 results found")
    );

    // Widening back out restores the full count
    app.filter_by_category(CategoryToken::all());
    assert_eq!(
        app.notices.as_ref().unwrap().results_count.as_deref(),
        Some("3 results found")
    );
}

#[test]
fn category_hiding_every_match_raises_no_results() {
    let (mut app, _) = app();
    app.run_search("experience");
    assert!(!app.notices.as_ref().unwrap().no_results);

    // "experience" only matches a general entry
    app.filter_by_category(CategoryToken::new("events"));
    let notices = app.notices.as_ref().unwrap();
    assert_eq!(notices.results_count.as_deref(), Some("0 results found"));
    assert!(notices.no_results);
}

#[test]
fn category_filter_without_search_leaves_notices_alone() {
    let (mut app, _) = app();
    app.filter_by_category(CategoryToken::new("events"));
    assert!(app.notices.is_none());
}

#[test]
fn category_filter_collapses_open_entries() {
    let (mut app, now) = app();
    app.toggle_selected(now);
    app.filter_by_category(CategoryToken::new("events"));
    assert_eq!(app.stats().open, 0);
}

#[test]
fn selection_skips_hidden_entries() {
    let (mut app, _) = app();
    app.filter_by_category(CategoryToken::new("events"));
    assert_eq!(app.selected, 1);
    app.select_next();
    assert_eq!(app.selected, 3);
    app.select_next();
    assert_eq!(app.selected, 3);
    app.select_prev();
    assert_eq!(app.selected, 1);
}

#[test]
fn category_controls_start_with_sentinel() {
    let (app, _) = app();
    let controls = app.category_controls();
    assert_eq!(controls[0], CategoryToken::all());
    assert_eq!(controls[1], CategoryToken::new("general"));
    assert_eq!(controls[2], CategoryToken::new("events"));
}

#[test]
fn cycle_category_wraps_both_ways() {
    let (mut app, _) = app();
    app.cycle_category(false);
    assert_eq!(app.category.selected(), &CategoryToken::new("events"));
    app.cycle_category(true);
    assert_eq!(app.category.selected(), &CategoryToken::all());
}

#[test]
fn deck_without_slides_disables_the_screen() {
    let deck = Deck::new("T", vec![entry(0, "Q", "A", None)], vec![]);
    let app = AppState::new(deck, AUTO_ADVANCE_INTERVAL, Instant::now());
    assert!(app.slideshow.is_none());
}

#[test]
fn opening_schedules_a_delayed_reveal() {
    let (mut app, now) = app();
    app.toggle_selected(now);
    assert!(app.take_pending_reveal().is_none());
    assert!(app.tick(now + REVEAL_DELAY));
    assert_eq!(app.take_pending_reveal(), Some(0));
    // Consumed once
    assert!(app.take_pending_reveal().is_none());
}

#[test]
fn toggle_on_hidden_selection_is_ignored() {
    let (mut app, now) = app();
    app.filter_by_category(CategoryToken::new("events"));
    app.selected = 0; // hidden under the events filter
    assert!(app.toggle_selected(now).is_none());
    assert_eq!(app.stats().open, 0);
}

#[test]
fn tick_advances_the_slideshow() {
    let (mut app, now) = app();
    assert!(app.tick(now + AUTO_ADVANCE_INTERVAL));
    assert_eq!(app.slideshow.as_ref().unwrap().current(), 1);
}
