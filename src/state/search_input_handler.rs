//! Search input editing (pure state transitions).
//!
//! Handles text input for the `SearchState::Typing` variant. All
//! functions are pure; the debounce timer that actually triggers
//! execution lives in `AppState`.

use crate::state::SearchState;

/// Insert a character at the cursor and advance it.
/// No-op outside the Typing state.
pub fn handle_char_input(state: SearchState, ch: char) -> SearchState {
    match state {
        SearchState::Typing { mut query, cursor } => {
            let byte = byte_offset(&query, cursor);
            query.insert(byte, ch);
            SearchState::Typing {
                query,
                cursor: cursor + 1,
            }
        }
        other => other,
    }
}

/// Delete the character before the cursor, if any.
/// No-op outside the Typing state.
pub fn handle_backspace(state: SearchState) -> SearchState {
    match state {
        SearchState::Typing { mut query, cursor } => {
            if cursor > 0 {
                let byte = byte_offset(&query, cursor - 1);
                query.remove(byte);
                SearchState::Typing {
                    query,
                    cursor: cursor - 1,
                }
            } else {
                SearchState::Typing { query, cursor }
            }
        }
        other => other,
    }
}

/// Move cursor left, saturating at 0.
pub fn handle_cursor_left(state: SearchState) -> SearchState {
    match state {
        SearchState::Typing { query, cursor } => SearchState::Typing {
            query,
            cursor: cursor.saturating_sub(1),
        },
        other => other,
    }
}

/// Move cursor right, saturating at the query length.
pub fn handle_cursor_right(state: SearchState) -> SearchState {
    match state {
        SearchState::Typing { query, cursor } => {
            let max_cursor = query.chars().count();
            SearchState::Typing {
                query,
                cursor: (cursor + 1).min(max_cursor),
            }
        }
        other => other,
    }
}

/// Begin typing a query. Carries over the active term so the user can
/// refine it; from Inactive starts empty.
pub fn activate_search_input(state: SearchState) -> SearchState {
    match state {
        SearchState::Inactive => SearchState::Typing {
            query: String::new(),
            cursor: 0,
        },
        SearchState::Active { query, .. } => {
            let text = query.as_str().to_string();
            let cursor = text.chars().count();
            SearchState::Typing {
                query: text,
                cursor,
            }
        }
        typing @ SearchState::Typing { .. } => typing,
    }
}

/// Cursor position in chars → byte offset.
fn byte_offset(query: &str, cursor: usize) -> usize {
    query
        .char_indices()
        .nth(cursor)
        .map(|(idx, _)| idx)
        .unwrap_or(query.len())
}

// ===== Tests =====
