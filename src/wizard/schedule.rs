//! Cancellable timer handles
//!
//! The wizard never registers callbacks with an ambient timer registry.
//! Whoever needs a timer owns the handle, polls it with the current time
//! and cancels it (or drops it) when done.

use std::time::{Duration, Instant};

/// A one-shot timer: "run after N"
#[derive(Debug, Clone)]
pub struct Timeout {
    deadline: Instant,
    armed: bool,
}

impl Timeout {
    /// Arm a timeout that fires `delay` after `now`
    pub fn after(now: Instant, delay: Duration) -> Self {
        Self {
            deadline: now + delay,
            armed: true,
        }
    }

    /// Returns the deadline exactly once, the first time `now` reaches it
    pub fn poll(&mut self, now: Instant) -> Option<Instant> {
        if self.armed && now >= self.deadline {
            self.armed = false;
            Some(self.deadline)
        } else {
            None
        }
    }

    pub fn cancel(&mut self) {
        self.armed = false;
    }
}

/// A repeating timer: "run every N"
#[derive(Debug, Clone)]
pub struct Interval {
    next: Instant,
    period: Duration,
    armed: bool,
}

impl Interval {
    /// Arm an interval whose first fire is one `period` after `start`
    pub fn every(start: Instant, period: Duration) -> Self {
        Self {
            next: start + period,
            period,
            armed: true,
        }
    }

    /// Number of periods that elapsed since the previous poll
    ///
    /// A late poll reports every missed period so callers can catch up.
    pub fn poll(&mut self, now: Instant) -> u32 {
        if !self.armed || self.period.is_zero() {
            return 0;
        }

        let mut fired = 0;
        while now >= self.next {
            fired += 1;
            self.next += self.period;
        }
        fired
    }

    pub fn cancel(&mut self) {
        self.armed = false;
    }
}
