//! Application state and transitions.
//!
//! `AppState` is the root state type: the loaded deck plus all UI state.
//! Transitions are plain methods mutating state; nothing here touches
//! the terminal, so the whole surface is testable without a rendering
//! backend. Timer-driven behavior is advanced by [`AppState::tick`],
//! which the event loop calls with the current instant.

use crate::analytics::{faq_interaction, InteractionEvent};
use crate::model::{CategoryToken, Deck, FaqStats};
use crate::state::accordion::{AccordionState, Toggled};
use crate::state::filter::{CategoryFilter, VisibilityState};
use crate::state::search::{execute_search, results_label, SearchQuery, SearchState};
use crate::state::slideshow::SlideshowState;
use crate::state::timers::SlotTimer;
use crate::state::FormState;
use std::time::{Duration, Instant};
use tracing::debug;

/// Quiet period before a typed query actually runs.
pub const DEBOUNCE_QUIET: Duration = Duration::from_millis(300);

/// Delay before an opened entry is scrolled into view, letting the
/// open state render first.
pub const REVEAL_DELAY: Duration = Duration::from_millis(100);

// ===== Screen =====

/// Which screen is showing. Screens are siblings; none calls into
/// another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Searchable FAQ accordion.
    #[default]
    Faq,
    /// Membership application form.
    Membership,
    /// Contact form.
    Contact,
    /// Announcements slideshow.
    Slides,
}

// ===== SearchNotices =====

/// Results-count indicator and no-results notice.
///
/// Created lazily on the first search and reused afterwards.
#[derive(Debug, Clone, Default)]
pub struct SearchNotices {
    /// Count label, shown only while a term is active.
    pub results_count: Option<String>,
    /// Whether the no-results notice is showing.
    pub no_results: bool,
}

// ===== AppState =====

/// Root application state: the loaded deck plus every piece of UI state.
#[derive(Debug, Clone)]
pub struct AppState {
    deck: Deck,
    /// Which screen is showing.
    pub screen: Screen,
    /// Open/closed flags for the FAQ entries.
    pub accordion: AccordionState,
    /// Search state machine.
    pub search: SearchState,
    /// Selected category filter.
    pub category: CategoryFilter,
    /// Composed per-entry visibility.
    pub visibility: VisibilityState,
    /// Selected entry (deck index), kept on a visible entry.
    pub selected: usize,
    /// First visible line of the FAQ pane.
    pub scroll_offset: usize,
    /// Whether the help overlay is showing.
    pub help_visible: bool,
    /// Search notices, created lazily on the first search.
    pub notices: Option<SearchNotices>,
    /// Membership application form.
    pub membership: FormState,
    /// Contact form.
    pub contact: FormState,
    /// `None` when the deck carries no slides; the screen is disabled.
    pub slideshow: Option<SlideshowState>,
    /// Transient status-line message (export result and the like).
    pub status: Option<String>,

    debounce: SlotTimer,
    pending_query: Option<String>,
    reveal_timer: SlotTimer,
    reveal_target: Option<usize>,
    pending_reveal: Option<usize>,
}

impl AppState {
    /// Build the initial state for a loaded deck. The slideshow exists
    /// only when the deck carries slides.
    pub fn new(deck: Deck, slide_interval: Duration, now: Instant) -> Self {
        let len = deck.len();
        let slideshow = if deck.slides().is_empty() {
            None
        } else {
            Some(SlideshowState::new(deck.slides().len(), slide_interval, now))
        };
        Self {
            accordion: AccordionState::new(len),
            search: SearchState::Inactive,
            category: CategoryFilter::default(),
            visibility: VisibilityState::new(len),
            selected: 0,
            scroll_offset: 0,
            screen: Screen::Faq,
            help_visible: false,
            notices: None,
            membership: FormState::membership(),
            contact: FormState::contact(),
            slideshow,
            status: None,
            debounce: SlotTimer::default(),
            pending_query: None,
            reveal_timer: SlotTimer::default(),
            reveal_target: None,
            pending_reveal: None,
            deck,
        }
    }

    /// The loaded deck.
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Aggregate open/closed counts.
    pub fn stats(&self) -> FaqStats {
        self.accordion.stats()
    }

    // ===== Accordion operations =====

    /// Toggle the selected entry, returning the interaction event for the
    /// analytics sink. Opening schedules the delayed scroll-into-view.
    pub fn toggle_selected(&mut self, now: Instant) -> Option<InteractionEvent> {
        let index = self.selected;
        if !self.visibility.is_visible(index) {
            return None;
        }
        let toggled = self.accordion.toggle(index)?;
        let question = self.deck.entries()[index].question();
        let opened = toggled == Toggled::Opened;
        if opened {
            self.reveal_target = Some(index);
            self.reveal_timer.schedule(now, REVEAL_DELAY);
        }
        debug!(index, opened, "FAQ toggle");
        Some(faq_interaction(question, opened))
    }

    /// Open one entry, closing all others.
    pub fn open_entry(&mut self, index: usize) {
        self.accordion.open(index);
    }

    /// Close one entry.
    pub fn close_entry(&mut self, index: usize) {
        self.accordion.close(index);
    }

    /// Open every entry.
    pub fn expand_all(&mut self) {
        self.accordion.expand_all();
    }

    /// Close every entry.
    pub fn collapse_all(&mut self) {
        self.accordion.collapse_all();
    }

    // ===== Selection =====

    /// Move selection to the next visible entry (no wrap).
    pub fn select_next(&mut self) {
        let visible = self.visibility.visible_indices();
        if let Some(pos) = visible.iter().position(|i| *i == self.selected) {
            if pos + 1 < visible.len() {
                self.selected = visible[pos + 1];
            }
        } else if let Some(first) = visible.first() {
            self.selected = *first;
        }
    }

    /// Move selection to the previous visible entry (no wrap).
    pub fn select_prev(&mut self) {
        let visible = self.visibility.visible_indices();
        if let Some(pos) = visible.iter().position(|i| *i == self.selected) {
            if pos > 0 {
                self.selected = visible[pos - 1];
            }
        } else if let Some(first) = visible.first() {
            self.selected = *first;
        }
    }

    /// Keep the selection on a visible entry after a filter change.
    fn clamp_selection(&mut self) {
        if !self.visibility.is_visible(self.selected) {
            self.selected = self.visibility.visible_indices().first().copied().unwrap_or(0);
        }
    }

    // ===== Search =====

    /// Run a search immediately. An empty or whitespace term clears
    /// instead. Every filter change collapses all entries: a hidden
    /// entry must never stay open.
    pub fn run_search(&mut self, raw: &str) {
        match SearchQuery::new(raw) {
            Some(query) => {
                self.pending_query = None;
                self.debounce.cancel();
                let outcome = execute_search(self.deck.entries(), &query);
                self.visibility.set_search_pass(outcome.matched.clone());
                self.accordion.collapse_all();
                self.update_notices(outcome.has_results());
                self.search = SearchState::Active { query, outcome };
                self.clamp_selection();
                self.scroll_offset = 0;
            }
            None => self.clear_search(),
        }
    }

    /// Restore all entries, strip highlights, hide both notices.
    /// Needs no knowledge of the previous term.
    pub fn clear_search(&mut self) {
        self.search = SearchState::Inactive;
        self.visibility.clear_search_pass();
        self.accordion.collapse_all();
        self.pending_query = None;
        self.debounce.cancel();
        if let Some(notices) = &mut self.notices {
            notices.results_count = None;
            notices.no_results = false;
        }
        self.clamp_selection();
    }

    fn update_notices(&mut self, has_results: bool) {
        // Count reflects composed visibility, not just the search side
        let visible = self.visibility.visible_count();
        let notices = self.notices.get_or_insert_with(SearchNotices::default);
        notices.results_count = Some(results_label(visible));
        notices.no_results = !has_results || visible == 0;
    }

    /// Record a keystroke's worth of query text and restart the debounce.
    /// The search itself runs when the quiet period elapses.
    pub fn schedule_search(&mut self, raw: String, now: Instant) {
        self.pending_query = Some(raw);
        self.debounce.schedule(now, DEBOUNCE_QUIET);
    }

    // ===== Category filter =====

    /// Apply a category filter. Collapses every open entry, since a
    /// previously open item may become hidden. With a search active the
    /// notices are recomputed too, so the count tracks composed
    /// visibility.
    pub fn filter_by_category(&mut self, token: CategoryToken) {
        self.category.select(token);
        let pass = self.category.apply(self.deck.entries());
        self.visibility.set_category_pass(pass);
        self.accordion.collapse_all();
        if let SearchState::Active { outcome, .. } = &self.search {
            let has_results = outcome.has_results();
            self.update_notices(has_results);
        }
        self.clamp_selection();
        self.scroll_offset = 0;
    }

    /// Category controls in display order: the sentinel first, then the
    /// deck's categories. Empty (no controls) when the deck has none.
    pub fn category_controls(&self) -> Vec<CategoryToken> {
        let cats = self.deck.categories();
        if cats.is_empty() {
            return Vec::new();
        }
        let mut controls = vec![CategoryToken::all()];
        controls.extend(cats);
        controls
    }

    /// Select the next/previous category control, wrapping.
    pub fn cycle_category(&mut self, forward: bool) {
        let controls = self.category_controls();
        if controls.is_empty() {
            return;
        }
        let current = controls
            .iter()
            .position(|c| c == self.category.selected())
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % controls.len()
        } else {
            (current + controls.len() - 1) % controls.len()
        };
        self.filter_by_category(controls[next].clone());
    }

    // ===== Timers =====

    /// Advance all timer-driven behavior. Returns true when anything
    /// changed and a redraw is needed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;

        if self.debounce.fire_if_due(now) {
            if let Some(raw) = self.pending_query.take() {
                self.run_search(&raw);
                changed = true;
            }
        }

        if self.reveal_timer.fire_if_due(now) {
            self.pending_reveal = self.reveal_target.take();
            changed |= self.pending_reveal.is_some();
        }

        if let Some(slideshow) = &mut self.slideshow {
            changed |= slideshow.tick(now);
        }

        changed |= self.membership.tick(now);
        changed |= self.contact.tick(now);

        changed
    }

    /// Entry awaiting scroll-into-view, if its delay has elapsed.
    /// Consumed by the view layer, which owns the geometry.
    pub fn take_pending_reveal(&mut self) -> Option<usize> {
        self.pending_reveal.take()
    }

    /// True while a typed query waits for its quiet period.
    pub fn search_pending(&self) -> bool {
        self.pending_query.is_some()
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
