//! Fixed-period tick scheduling.

use std::time::{Duration, Instant};

/// Schedules ticks at a fixed period on a monotonic clock.
///
/// Deadlines are anchored to the previous deadline rather than to when the
/// tick was actually handled, so handling time does not accumulate as drift.
/// If the caller falls more than a whole period behind, the schedule is
/// re-anchored to the present instead of firing a burst of catch-up ticks.
#[derive(Clone, Debug)]
pub struct Ticker {
    period: Duration,
    next: Instant,
}

impl Ticker {
    /// Create a new [`Ticker`] whose first tick is one period after `now`.
    pub fn new(period: Duration, now: Instant) -> Self {
        Self {
            period,
            next: now + period,
        }
    }

    /// How long until the next tick is due; zero if it already is.
    pub fn time_until_tick(&self, now: Instant) -> Duration {
        self.next.saturating_duration_since(now)
    }

    /// Returns whether a tick is due at `now`, scheduling the following one
    /// if so.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.next {
            return false;
        }

        self.next += self.period;
        if self.next <= now {
            self.next = now + self.period;
        }

        true
    }
}

/// Counts how many ticks happen per second.
#[derive(Clone, Debug)]
pub struct RateCounter {
    window_start: Instant,
    ticks: u32,
}

impl RateCounter {
    pub fn new(now: Instant) -> Self {
        Self {
            window_start: now,
            ticks: 0,
        }
    }

    /// Count a tick. Once at least a second has passed since the last report,
    /// returns how many ticks were counted in that time and starts over.
    pub fn record(&mut self, now: Instant) -> Option<u32> {
        self.ticks += 1;

        if now.duration_since(self.window_start) >= Duration::from_secs(1) {
            let ticks = self.ticks;
            self.ticks = 0;
            self.window_start = now;
            Some(ticks)
        } else {
            None
        }
    }
}
