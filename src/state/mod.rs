//! UI state machine (pure).
//!
//! All state transitions are pure functions testable without a terminal.

pub mod accordion;
pub mod app_state;
pub mod filter;
pub mod form;
pub mod search;
pub mod search_input_handler;
pub mod slideshow;
pub mod timers;

// Re-export for convenience
pub use accordion::{AccordionState, Toggled};
pub use app_state::{AppState, Screen, SearchNotices, DEBOUNCE_QUIET, REVEAL_DELAY};
pub use filter::{CategoryFilter, VisibilityState};
pub use form::{Field, FieldId, FormKind, FormState, SUBMIT_DELAY, SUCCESS_NOTICE_TIMEOUT};
pub use search::{
    execute_search, results_label, EntryHighlights, MatchSpan, SearchOutcome, SearchQuery,
    SearchState,
};
pub use slideshow::{SlideshowState, AUTO_ADVANCE_INTERVAL};
pub use timers::{AutoAdvanceTimer, SlotTimer};
