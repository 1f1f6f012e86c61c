//! Accordion open/closed state.
//!
//! One boolean per deck entry. `toggle` enforces accordion exclusivity:
//! opening an entry first closes every other one. `expand_all` is the
//! sanctioned exception to exclusivity. The primitives are idempotent:
//! closing a closed entry or opening an open one changes nothing.

use crate::model::FaqStats;

/// What a toggle did, for interaction reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggled {
    /// The entry went from closed to open.
    Opened,
    /// The entry went from open to closed.
    Closed,
}

/// Open/closed flags for every deck entry.
#[derive(Debug, Clone)]
pub struct AccordionState {
    open: Vec<bool>,
}

impl AccordionState {
    /// All entries start closed.
    pub fn new(len: usize) -> Self {
        Self {
            open: vec![false; len],
        }
    }

    /// Number of tracked entries.
    pub fn len(&self) -> usize {
        self.open.len()
    }

    /// Whether no entries are tracked.
    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    /// Whether the entry at `index` is open. Out of range reads closed.
    pub fn is_open(&self, index: usize) -> bool {
        self.open.get(index).copied().unwrap_or(false)
    }

    /// Toggle with accordion exclusivity: opening closes all others first.
    /// Returns what happened, or `None` for an out-of-range index.
    pub fn toggle(&mut self, index: usize) -> Option<Toggled> {
        if index >= self.open.len() {
            return None;
        }
        if self.open[index] {
            self.open[index] = false;
            Some(Toggled::Closed)
        } else {
            self.collapse_all();
            self.open[index] = true;
            Some(Toggled::Opened)
        }
    }

    /// Open one entry, closing all others. Idempotent when already open
    /// and alone.
    pub fn open(&mut self, index: usize) {
        if index < self.open.len() {
            self.collapse_all();
            self.open[index] = true;
        }
    }

    /// Close one entry. Idempotent.
    pub fn close(&mut self, index: usize) {
        if index < self.open.len() {
            self.open[index] = false;
        }
    }

    /// Open every entry (exclusivity does not apply here).
    pub fn expand_all(&mut self) {
        self.open.iter_mut().for_each(|o| *o = true);
    }

    /// Close every entry.
    pub fn collapse_all(&mut self) {
        self.open.iter_mut().for_each(|o| *o = false);
    }

    /// Number of open entries.
    pub fn open_count(&self) -> usize {
        self.open.iter().filter(|o| **o).count()
    }

    /// Aggregate open/closed counts.
    pub fn stats(&self) -> FaqStats {
        let total = self.open.len();
        let open = self.open_count();
        FaqStats {
            total,
            open,
            closed: total - open,
        }
    }
}
