//! Search state machine and pure search execution.
//!
//! `SearchState` is a sum type: no search, user typing a query, or an
//! executed search with its outcome. Execution is a pure function over
//! the deck entries producing per-entry visibility and highlight spans,
//! testable without any rendering surface.

use crate::model::FaqEntry;

// ===== SearchState =====

/// Search state machine. Exactly one state at a time.
#[derive(Debug, Clone, Default)]
pub enum SearchState {
    /// No active search.
    #[default]
    Inactive,
    /// User is typing; the search itself runs after the debounce fires.
    Typing {
        /// Raw text typed so far.
        query: String,
        /// Cursor position within the query, in characters.
        cursor: usize,
    },
    /// Search executed; outcome drives visibility and highlighting.
    Active {
        /// The validated query that was executed.
        query: SearchQuery,
        /// Per-entry visibility and highlight spans from execution.
        outcome: SearchOutcome,
    },
}

impl SearchState {
    /// The term currently in effect, if any.
    pub fn active_query(&self) -> Option<&SearchQuery> {
        match self {
            SearchState::Active { query, .. } => Some(query),
            _ => None,
        }
    }
}

// ===== SearchQuery =====

/// Validated search term: trimmed, lowercased, never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Normalize and validate. Returns `None` for empty/whitespace input,
    /// which callers treat as "clear the search".
    pub fn new(raw: impl AsRef<str>) -> Option<Self> {
        let normalized = raw.as_ref().trim().to_lowercase();
        if normalized.is_empty() {
            None
        } else {
            Some(Self(normalized))
        }
    }

    /// The normalized term.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// ===== Highlight spans =====

/// Byte range of one matched occurrence within the original text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchSpan {
    /// Start byte offset, inclusive.
    pub start: usize,
    /// End byte offset, exclusive.
    pub end: usize,
}

/// Highlight spans for one entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryHighlights {
    /// Spans within the question text.
    pub question: Vec<MatchSpan>,
    /// Spans within the answer text.
    pub answer: Vec<MatchSpan>,
}

impl EntryHighlights {
    /// Whether the entry has no highlighted occurrences at all.
    pub fn is_empty(&self) -> bool {
        self.question.is_empty() && self.answer.is_empty()
    }
}

// ===== SearchOutcome =====

/// Result of executing a search over the whole deck.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Per-entry: does the term match question or answer?
    pub matched: Vec<bool>,
    /// Per-entry highlight spans (empty for non-matches).
    pub highlights: Vec<EntryHighlights>,
    /// Number of matching entries.
    pub visible_count: usize,
}

impl SearchOutcome {
    /// Whether at least one entry matched.
    pub fn has_results(&self) -> bool {
        self.visible_count > 0
    }
}

// ===== Execution =====

/// Execute a search across all entries.
///
/// An entry matches iff the term is a case-insensitive substring of its
/// question or its answer. Membership only; there is no ranking.
pub fn execute_search(entries: &[FaqEntry], query: &SearchQuery) -> SearchOutcome {
    let mut matched = Vec::with_capacity(entries.len());
    let mut highlights = Vec::with_capacity(entries.len());
    let mut visible_count = 0;

    for entry in entries {
        let question_spans = find_spans(entry.question(), query.as_str());
        let answer_spans = find_spans(entry.answer(), query.as_str());
        let hit = !question_spans.is_empty() || !answer_spans.is_empty();
        if hit {
            visible_count += 1;
        }
        matched.push(hit);
        highlights.push(EntryHighlights {
            question: question_spans,
            answer: answer_spans,
        });
    }

    SearchOutcome {
        matched,
        highlights,
        visible_count,
    }
}

/// Find every non-overlapping case-insensitive occurrence of
/// `query_lower` in `text`, as byte ranges into the original text.
///
/// Comparison is char-by-char so multi-byte text never produces spans
/// that split a character.
fn find_spans(text: &str, query_lower: &str) -> Vec<MatchSpan> {
    let query_chars: Vec<char> = query_lower.chars().collect();
    if query_chars.is_empty() {
        return Vec::new();
    }

    let mut spans = Vec::new();
    let mut iter = text.char_indices();
    'outer: while let Some((start, _)) = iter.clone().next() {
        let mut probe = iter.clone();
        let mut end = start;
        for qc in &query_chars {
            match probe.next() {
                Some((idx, tc)) => {
                    let mut lowered = tc.to_lowercase();
                    // Multi-char lowercase expansions cannot match a
                    // single pattern char; treat as mismatch.
                    let folded = lowered.next().unwrap_or(tc);
                    if lowered.next().is_some() || folded != *qc {
                        iter.next();
                        continue 'outer;
                    }
                    end = idx + tc.len_utf8();
                }
                None => break 'outer,
            }
        }
        spans.push(MatchSpan { start, end });
        // Skip past the match (non-overlapping occurrences)
        iter = probe;
    }
    spans
}

/// Results-count label with correct pluralization.
pub fn results_label(count: usize) -> String {
    if count == 1 {
        "1 result found".to_string()
    } else {
        format!("{count} results found")
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
