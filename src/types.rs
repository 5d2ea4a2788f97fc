//! Core types shared by the latch and the rearm task.

use crate::time::{TimeDuration, TimeInstant};

/// Ticks the edge source stays disarmed after the last captured edge.
pub const DEBOUNCE_WINDOW: u32 = 2000;

/// Ticks between heartbeat toggles.
pub const INTERVAL_PERIOD: u32 = 500;

/// Timing parameters for a [`RearmTask`](crate::RearmTask).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Timing<D: TimeDuration> {
    debounce_window: D,
    heartbeat_period: D,
}

impl<D: TimeDuration> Timing<D> {
    /// Creates validated timing parameters.
    ///
    /// A zero debounce window is allowed (the source is re-armed on the first
    /// tick after capture that observes any elapsed time). A zero heartbeat
    /// period is rejected since the heartbeat would toggle on every tick.
    pub fn new(debounce_window: D, heartbeat_period: D) -> Result<Self, TimingError> {
        if heartbeat_period == D::ZERO {
            return Err(TimingError::ZeroHeartbeatPeriod);
        }

        Ok(Self {
            debounce_window,
            heartbeat_period,
        })
    }

    /// Time the source stays disarmed after a captured edge.
    #[inline]
    pub fn debounce_window(&self) -> D {
        self.debounce_window
    }

    /// Time between heartbeat toggles.
    #[inline]
    pub fn heartbeat_period(&self) -> D {
        self.heartbeat_period
    }
}

impl<D: TimeDuration> Default for Timing<D> {
    fn default() -> Self {
        Self {
            debounce_window: D::from_ticks(DEBOUNCE_WINDOW),
            heartbeat_period: D::from_ticks(INTERVAL_PERIOD),
        }
    }
}

/// Timing validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimingError {
    /// Heartbeat period of zero ticks.
    ZeroHeartbeatPeriod,
}

impl core::fmt::Display for TimingError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TimingError::ZeroHeartbeatPeriod => {
                write!(f, "heartbeat period must be at least one tick")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TimingError {}

/// State of the debounce machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DebounceState<I> {
    /// No debounce pending. The edge source is armed.
    Idle,
    /// Edge captured at `since`. The edge source stays disarmed until the
    /// window has elapsed.
    Debouncing {
        /// Instant of the most recent capture.
        since: I,
    },
}

impl<I: TimeInstant> DebounceState<I> {
    /// Returns true while a debounce window is running.
    #[inline]
    pub fn is_debouncing(&self) -> bool {
        matches!(self, DebounceState::Debouncing { .. })
    }

    /// Instant of the capture that started the running window, if any.
    #[inline]
    pub fn since(&self) -> Option<I> {
        match self {
            DebounceState::Idle => None,
            DebounceState::Debouncing { since } => Some(*since),
        }
    }
}

/// What a single [`tick`](crate::RearmTask::tick) did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickEvents {
    /// A latched edge was consumed and a debounce window started.
    pub captured: bool,
    /// The capture restarted a window that was still running.
    pub extended: bool,
    /// The window elapsed and the edge source was re-armed.
    pub rearmed: bool,
    /// The heartbeat indicator toggled.
    pub heartbeat: bool,
}

/// Running totals kept by a [`RearmTask`](crate::RearmTask).
///
/// Counters wrap on overflow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DebounceStats {
    /// Edges consumed from the latch.
    pub edges_captured: u32,
    /// Captures that restarted a running window.
    pub extensions: u32,
    /// Times the edge source was re-armed after a window elapsed.
    pub rearms: u32,
    /// Heartbeat toggles.
    pub heartbeats: u32,
}

impl DebounceStats {
    pub(crate) fn record(&mut self, events: &TickEvents) {
        if events.captured {
            self.edges_captured = self.edges_captured.wrapping_add(1);
        }
        if events.extended {
            self.extensions = self.extensions.wrapping_add(1);
        }
        if events.rearmed {
            self.rearms = self.rearms.wrapping_add(1);
        }
        if events.heartbeat {
            self.heartbeats = self.heartbeats.wrapping_add(1);
        }
    }
}
