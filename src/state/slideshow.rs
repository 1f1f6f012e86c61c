//! Cyclic slideshow state machine.
//!
//! Advance, retreat, and jump are computed modulo the slide count.
//! Auto-advance pauses while the pointer hovers the slideshow area or
//! while the terminal has lost focus, and
//! resumes otherwise with a fresh full interval.

use crate::state::timers::AutoAdvanceTimer;
use std::time::{Duration, Instant};

/// Default auto-advance interval.
pub const AUTO_ADVANCE_INTERVAL: Duration = Duration::from_secs(5);

/// Current slide plus the pause-aware auto-advance timer.
#[derive(Debug, Clone)]
pub struct SlideshowState {
    current: usize,
    len: usize,
    timer: AutoAdvanceTimer,
    hovered: bool,
    hidden: bool,
}

impl SlideshowState {
    /// `len` must be non-zero; a deck without slides never constructs one.
    pub fn new(len: usize, interval: Duration, now: Instant) -> Self {
        debug_assert!(len > 0);
        Self {
            current: 0,
            len,
            timer: AutoAdvanceTimer::new(interval, now),
            hovered: false,
            hidden: false,
        }
    }

    /// Index of the showing slide.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Number of slides.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether auto-advance is suspended.
    pub fn is_paused(&self) -> bool {
        !self.timer.is_running()
    }

    /// Advance one slide, wrapping past the end.
    pub fn next_slide(&mut self) {
        self.current = (self.current + 1) % self.len;
    }

    /// Go back one slide, wrapping past the start.
    pub fn prev_slide(&mut self) {
        self.current = (self.current + self.len - 1) % self.len;
    }

    /// Jump directly; out-of-range indices wrap modulo the count.
    pub fn go_to_slide(&mut self, index: usize) {
        self.current = index % self.len;
    }

    /// Pointer entered/left the slideshow area.
    pub fn set_hovered(&mut self, hovered: bool, now: Instant) {
        self.hovered = hovered;
        self.apply_pause_state(now);
    }

    /// Terminal focus lost/gained.
    pub fn set_hidden(&mut self, hidden: bool, now: Instant) {
        self.hidden = hidden;
        self.apply_pause_state(now);
    }

    fn apply_pause_state(&mut self, now: Instant) {
        if self.hovered || self.hidden {
            self.timer.pause();
        } else {
            self.timer.resume(now);
        }
    }

    /// Advance on the auto-advance deadline. Called each event-loop tick;
    /// returns true when the slide changed (a redraw is needed).
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.timer.fire_if_due(now) {
            self.next_slide();
            true
        } else {
            false
        }
    }
}
