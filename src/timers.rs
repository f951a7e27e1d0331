//! Deadline-based debounce timers
//!
//! The controller owns no executor, so debouncing is a per-column deadline
//! re-armed on each triggering event and polled from the frame tick.
//! Cancel-then-reschedule discipline: at most one pending deadline per
//! timer per column.

use std::time::{Duration, Instant};

#[derive(Debug, Default, Clone)]
pub struct SettleTimer {
    deadline: Option<Instant>,
}

impl SettleTimer {
    /// Arm (or re-arm) the timer. Any pending deadline is replaced.
    pub fn arm(&mut self, now: Instant, debounce_ms: u64) {
        self.deadline = Some(now + Duration::from_millis(debounce_ms));
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// True exactly once per armed deadline, on the first poll at or past it.
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
