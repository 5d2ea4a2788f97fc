//! Fixed-period heartbeat timer.

use crate::time::TimeInstant;

/// Fires once every `period`, measured from the last time it fired.
///
/// The reference instant moves to the `now` value that fired, not to the ideal
/// deadline, so a late poll delays every following beat rather than bunching
/// them up.
#[derive(Debug, Clone, Copy)]
pub struct Heartbeat<I: TimeInstant> {
    last: I,
    period: I::Duration,
}

impl<I: TimeInstant> Heartbeat<I> {
    /// Creates a heartbeat referenced to the clock origin.
    pub fn new(period: I::Duration) -> Self {
        Self::starting_at(I::ZERO, period)
    }

    /// Creates a heartbeat referenced to `origin`.
    pub fn starting_at(origin: I, period: I::Duration) -> Self {
        Self {
            last: origin,
            period,
        }
    }

    /// Returns true if at least one period has passed since the last beat.
    pub fn poll(&mut self, now: I) -> bool {
        if now.duration_since(self.last) >= self.period {
            self.last = now;
            true
        } else {
            false
        }
    }

    /// Instant of the last beat (or the origin if none fired yet).
    pub fn last_fired(&self) -> I {
        self.last
    }

    pub fn period(&self) -> I::Duration {
        self.period
    }
}
