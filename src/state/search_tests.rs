//! Tests for search execution and highlighting.

use super::*;
use crate::model::{CategoryToken, FaqEntry};

fn entry(idx: usize, q: &str, a: &str) -> FaqEntry {
    FaqEntry::new(idx, q, a, None::<CategoryToken>).unwrap()
}

fn deck() -> Vec<FaqEntry> {
    vec![
        entry(0, "Why ABC?", "Because."),
        entry(1, "Other", "None"),
        entry(2, "About abc and ABC", "abc everywhere"),
    ]
}

#[test]
fn query_is_trimmed_and_lowercased() {
    let q = SearchQuery::new("  AbC  ").unwrap();
    assert_eq!(q.as_str(), "abc");
}

#[test]
fn empty_or_whitespace_query_is_rejected() {
    assert!(SearchQuery::new("").is_none());
    assert!(SearchQuery::new("   ").is_none());
}

#[test]
fn matching_is_case_insensitive_substring_over_question_and_answer() {
    let q = SearchQuery::new("abc").unwrap();
    let outcome = execute_search(&deck(), &q);
    assert_eq!(outcome.matched, vec![true, false, true]);
    assert_eq!(outcome.visible_count, 2);
}

#[test]
fn matched_entry_question_is_highlighted() {
    let q = SearchQuery::new("abc").unwrap();
    let outcome = execute_search(&deck(), &q);

    let spans = &outcome.highlights[0].question;
    assert_eq!(spans.len(), 1);
    let span = spans[0];
    assert_eq!(&"Why ABC?"[span.start..span.end], "ABC");

    // Non-match carries no highlights
    assert!(outcome.highlights[1].is_empty());
}

#[test]
fn every_occurrence_is_highlighted() {
    let q = SearchQuery::new("abc").unwrap();
    let outcome = execute_search(&deck(), &q);

    assert_eq!(outcome.highlights[2].question.len(), 2);
    assert_eq!(outcome.highlights[2].answer.len(), 1);
}

#[test]
fn answer_only_match_is_visible() {
    let entries = vec![entry(0, "Unrelated", "Contains the term inside")];
    let q = SearchQuery::new("TERM").unwrap();
    let outcome = execute_search(&entries, &q);
    assert!(outcome.matched[0]);
    assert!(outcome.highlights[0].question.is_empty());
    assert_eq!(outcome.highlights[0].answer.len(), 1);
}

#[test]
fn occurrences_do_not_overlap() {
    let entries = vec![entry(0, "aaa", "b")];
    let q = SearchQuery::new("aa").unwrap();
    let outcome = execute_search(&entries, &q);
    assert_eq!(outcome.highlights[0].question.len(), 1);
}

#[test]
fn multibyte_text_produces_char_aligned_spans() {
    let entries = vec![entry(0, "Café hours", "Ask at the café")];
    let q = SearchQuery::new("café").unwrap();
    let outcome = execute_search(&entries, &q);
    let span = outcome.highlights[0].question[0];
    assert_eq!(&"Café hours"[span.start..span.end], "Café");
}

#[test]
fn no_results_outcome() {
    let q = SearchQuery::new("zzz").unwrap();
    let outcome = execute_search(&deck(), &q);
    assert!(!outcome.has_results());
    assert_eq!(outcome.visible_count, 0);
}

#[test]
fn results_label_pluralizes() {
    assert_eq!(results_label(1), "1 result found");
    assert_eq!(results_label(0), "0 results found");
    assert_eq!(results_label(3), "3 results found");
}

#[test]
fn active_query_accessor() {
    let state = SearchState::Active {
        query: SearchQuery::new("x").unwrap(),
        outcome: SearchOutcome::default(),
    };
    assert_eq!(state.active_query().unwrap().as_str(), "x");
    assert!(SearchState::Inactive.active_query().is_none());
}
