//! Category filtering and composed visibility.
//!
//! The search and category predicates are stored separately and
//! composed as a logical AND, so re-running one never undoes the other.

use crate::model::{CategoryToken, FaqEntry};

// ===== CategoryFilter =====

/// Currently selected category control. `"all"` selects everything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryFilter {
    selected: CategoryToken,
}

impl Default for CategoryFilter {
    fn default() -> Self {
        Self {
            selected: CategoryToken::all(),
        }
    }
}

impl CategoryFilter {
    /// The selected control.
    pub fn selected(&self) -> &CategoryToken {
        &self.selected
    }

    /// Select a control.
    pub fn select(&mut self, token: CategoryToken) {
        self.selected = token;
    }

    /// Exact, case-sensitive match against the entry's stored category;
    /// the sentinel passes everything. Entries without a category only
    /// pass the sentinel.
    pub fn passes(&self, entry: &FaqEntry) -> bool {
        if self.selected.is_all() {
            return true;
        }
        entry.category() == Some(&self.selected)
    }

    /// Per-entry predicate results over the whole deck.
    pub fn apply(&self, entries: &[FaqEntry]) -> Vec<bool> {
        entries.iter().map(|e| self.passes(e)).collect()
    }
}

// ===== VisibilityState =====

/// Composed visibility: AND of the search predicate and the category
/// predicate. Either side can be re-applied without touching the other.
#[derive(Debug, Clone)]
pub struct VisibilityState {
    search_pass: Vec<bool>,
    category_pass: Vec<bool>,
}

impl VisibilityState {
    /// Everything visible.
    pub fn new(len: usize) -> Self {
        Self {
            search_pass: vec![true; len],
            category_pass: vec![true; len],
        }
    }

    /// Replace the search side of the predicate.
    pub fn set_search_pass(&mut self, pass: Vec<bool>) {
        debug_assert_eq!(pass.len(), self.search_pass.len());
        self.search_pass = pass;
    }

    /// Reset the search side to all-visible (term cleared).
    pub fn clear_search_pass(&mut self) {
        self.search_pass.iter_mut().for_each(|p| *p = true);
    }

    /// Replace the category side of the predicate.
    pub fn set_category_pass(&mut self, pass: Vec<bool>) {
        debug_assert_eq!(pass.len(), self.category_pass.len());
        self.category_pass = pass;
    }

    /// Whether the entry at `index` passes both predicates.
    pub fn is_visible(&self, index: usize) -> bool {
        self.search_pass.get(index).copied().unwrap_or(false)
            && self.category_pass.get(index).copied().unwrap_or(false)
    }

    /// Number of visible entries.
    pub fn visible_count(&self) -> usize {
        (0..self.search_pass.len())
            .filter(|i| self.is_visible(*i))
            .count()
    }

    /// Indices of visible entries, in document order.
    pub fn visible_indices(&self) -> Vec<usize> {
        (0..self.search_pass.len())
            .filter(|i| self.is_visible(*i))
            .collect()
    }
}
