//! Cancellable scheduled tasks driven by the event-loop tick.
//!
//! All asynchrony in this application is a deadline checked against the
//! clock on each tick. [`SlotTimer`] holds at most one pending deadline
//! with replacement semantics: scheduling again cancels whatever was
//! pending. [`AutoAdvanceTimer`] is its repeating, pausable cousin used
//! by the slideshow.

use std::time::{Duration, Instant};

// ===== SlotTimer =====

/// Single-slot cancellable deadline.
///
/// Used for the search debounce, the scroll-into-view delay, the
/// simulated form submission, and the success-notice dismissal.
#[derive(Debug, Clone, Copy, Default)]
pub struct SlotTimer {
    deadline: Option<Instant>,
}

impl SlotTimer {
    /// Schedule (or reschedule) the timer to fire after `delay`.
    /// Any pending deadline is replaced.
    pub fn schedule(&mut self, now: Instant, delay: Duration) {
        self.deadline = Some(now + delay);
    }

    /// Drop any pending deadline.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Whether a deadline is pending.
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns true exactly once when the deadline has passed, clearing it.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

// ===== AutoAdvanceTimer =====

/// Repeating deadline with pause/resume, for slideshow auto-advance.
///
/// While paused the deadline is dropped; resuming schedules a fresh full
/// interval rather than crediting time that passed while paused.
#[derive(Debug, Clone, Copy)]
pub struct AutoAdvanceTimer {
    interval: Duration,
    next: Option<Instant>,
}

impl AutoAdvanceTimer {
    /// Start running, with the first fire one interval from `now`.
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next: Some(now + interval),
        }
    }

    /// Stop firing until resumed.
    pub fn pause(&mut self) {
        self.next = None;
    }

    /// Resume with a fresh full interval. No-op while already running.
    pub fn resume(&mut self, now: Instant) {
        if self.next.is_none() {
            self.next = Some(now + self.interval);
        }
    }

    /// Whether the timer is running (not paused).
    pub fn is_running(&self) -> bool {
        self.next.is_some()
    }

    /// Returns true when the interval elapsed, rescheduling the next fire.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.next {
            Some(next) if now >= next => {
                self.next = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn slot_timer_fires_once_after_delay() {
        let start = Instant::now();
        let mut timer = SlotTimer::default();
        timer.schedule(start, 300 * MS);

        assert!(!timer.fire_if_due(start + 100 * MS));
        assert!(timer.fire_if_due(start + 300 * MS));
        // Cleared after firing
        assert!(!timer.fire_if_due(start + 400 * MS));
        assert!(!timer.is_pending());
    }

    #[test]
    fn rescheduling_replaces_pending_deadline() {
        let start = Instant::now();
        let mut timer = SlotTimer::default();
        timer.schedule(start, 300 * MS);
        // Keystroke arrives; debounce restarts
        timer.schedule(start + 200 * MS, 300 * MS);

        assert!(
            !timer.fire_if_due(start + 350 * MS),
            "original deadline must have been cancelled"
        );
        assert!(timer.fire_if_due(start + 500 * MS));
    }

    #[test]
    fn cancel_drops_pending_deadline() {
        let start = Instant::now();
        let mut timer = SlotTimer::default();
        timer.schedule(start, 10 * MS);
        timer.cancel();
        assert!(!timer.fire_if_due(start + 20 * MS));
    }

    #[test]
    fn auto_advance_repeats() {
        let start = Instant::now();
        let mut timer = AutoAdvanceTimer::new(100 * MS, start);

        assert!(timer.fire_if_due(start + 100 * MS));
        assert!(!timer.fire_if_due(start + 150 * MS));
        assert!(timer.fire_if_due(start + 200 * MS));
    }

    #[test]
    fn auto_advance_pause_and_resume_restarts_full_interval() {
        let start = Instant::now();
        let mut timer = AutoAdvanceTimer::new(100 * MS, start);

        timer.pause();
        assert!(!timer.fire_if_due(start + 500 * MS));
        assert!(!timer.is_running());

        timer.resume(start + 500 * MS);
        assert!(!timer.fire_if_due(start + 550 * MS));
        assert!(timer.fire_if_due(start + 600 * MS));
    }

    #[test]
    fn resume_while_running_is_a_no_op() {
        let start = Instant::now();
        let mut timer = AutoAdvanceTimer::new(100 * MS, start);
        timer.resume(start + 90 * MS);
        // Original deadline untouched
        assert!(timer.fire_if_due(start + 100 * MS));
    }
}
