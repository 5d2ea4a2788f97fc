//! Polled debounce and rearm task.
//!
//! Provides [`RearmTask`], which consumes edges recorded by an
//! [`EdgeLatch`], holds the edge source disarmed for a debounce window and
//! then re-arms it. The same task drives an unrelated heartbeat indicator from
//! the same clock.

use crate::heartbeat::Heartbeat;
use crate::indicator::Indicator;
use crate::latch::{EdgeLatch, EdgeSource};
use crate::time::{TimeInstant, TimeSource};
use crate::types::{DebounceState, DebounceStats, TickEvents, Timing};

/// Debounces one interrupt-driven input by timed re-arming.
///
/// The interrupt handler calls [`EdgeLatch::on_edge`], which records the edge
/// and disarms the source. The main loop calls [`tick`](Self::tick) with the
/// current time as often as it can. On the first tick after an edge the task
/// starts a debounce window; once more than `debounce_window` has passed it
/// re-arms the source.
///
/// The status indicator is lit while the source is held disarmed. The heartbeat
/// indicator toggles every `heartbeat_period` regardless of debounce state.
///
/// # Type Parameters
/// * `'l` - Lifetime of the latch reference (usually `'static`)
/// * `I` - Time instant type
/// * `S` - Edge source implementation type
/// * `A` - Status indicator type
/// * `H` - Heartbeat indicator type
pub struct RearmTask<'l, I: TimeInstant, S: EdgeSource, A: Indicator, H: Indicator> {
    latch: &'l EdgeLatch,
    source: S,
    status: A,
    heartbeat_led: H,
    timing: Timing<I::Duration>,
    state: DebounceState<I>,
    heartbeat: Heartbeat<I>,
    status_lit: bool,
    stats: DebounceStats,
}

impl<'l, I: TimeInstant, S: EdgeSource, A: Indicator, H: Indicator> RearmTask<'l, I, S, A, H> {
    /// Creates an idle task with default timing and arms the edge source.
    pub fn new(latch: &'l EdgeLatch, source: S, status: A, heartbeat_led: H) -> Self {
        Self::with_timing(latch, source, status, heartbeat_led, Timing::default())
    }

    /// Creates an idle task with custom timing and arms the edge source.
    ///
    /// Both indicators start off.
    pub fn with_timing(
        latch: &'l EdgeLatch,
        mut source: S,
        mut status: A,
        mut heartbeat_led: H,
        timing: Timing<I::Duration>,
    ) -> Self {
        status.off();
        heartbeat_led.off();
        source.arm();

        Self {
            latch,
            source,
            status,
            heartbeat_led,
            timing,
            state: DebounceState::Idle,
            heartbeat: Heartbeat::new(timing.heartbeat_period()),
            status_lit: false,
            stats: DebounceStats::default(),
        }
    }

    /// Runs one polling step at time `now`.
    ///
    /// 1. Consumes a latched edge, (re)starting the debounce window at `now`.
    /// 2. Re-arms the source once strictly more than the window has elapsed.
    /// 3. Toggles the heartbeat when at least one period has elapsed.
    pub fn tick(&mut self, now: I) -> TickEvents {
        let mut events = TickEvents::default();

        if self.latch.take() {
            events.captured = true;
            events.extended = self.state.is_debouncing();
            self.state = DebounceState::Debouncing { since: now };

            #[cfg(feature = "defmt")]
            defmt::debug!("edge captured, window restarted: {}", events.extended);
        }

        match self.state {
            DebounceState::Debouncing { since }
                if now.duration_since(since) > self.timing.debounce_window() =>
            {
                self.state = DebounceState::Idle;
                self.source.arm();
                self.show_disarmed(false);
                events.rearmed = true;

                #[cfg(feature = "defmt")]
                defmt::debug!("debounce window elapsed, edge source re-armed");
            }
            DebounceState::Debouncing { .. } => self.show_disarmed(true),
            DebounceState::Idle => self.show_disarmed(false),
        }

        if self.heartbeat.poll(now) {
            self.heartbeat_led.toggle();
            events.heartbeat = true;
        }

        self.stats.record(&events);
        events
    }

    /// Reads the clock and runs [`tick`](Self::tick).
    pub fn service<T: TimeSource<I>>(&mut self, clock: &T) -> TickEvents {
        self.tick(clock.now())
    }

    // The status line is written on change only.
    fn show_disarmed(&mut self, lit: bool) {
        if self.status_lit != lit {
            self.status.set(lit);
            self.status_lit = lit;
        }
    }

    /// Returns the current debounce state.
    pub fn state(&self) -> DebounceState<I> {
        self.state
    }

    /// Returns true if the edge source reports itself armed.
    pub fn is_armed(&self) -> bool {
        self.source.is_armed()
    }

    /// Instant the running debounce window started, if any.
    pub fn debounce_started(&self) -> Option<I> {
        self.state.since()
    }

    /// Instant the heartbeat last toggled (the clock origin before the first
    /// toggle).
    pub fn heartbeat_timestamp(&self) -> I {
        self.heartbeat.last_fired()
    }

    pub fn stats(&self) -> DebounceStats {
        self.stats
    }

    pub fn timing(&self) -> Timing<I::Duration> {
        self.timing
    }

    /// Returns the latch this task consumes.
    pub fn latch(&self) -> &'l EdgeLatch {
        self.latch
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Mutable access to the edge source, e.g. to hand it to
    /// [`EdgeLatch::on_edge`] when the handler and the task share one handle.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn status_indicator(&self) -> &A {
        &self.status
    }

    pub fn heartbeat_indicator(&self) -> &H {
        &self.heartbeat_led
    }

    /// Consumes the task and returns the hardware handles.
    pub fn release(self) -> (S, A, H) {
        (self.source, self.status, self.heartbeat_led)
    }
}
