//! Shared test infrastructure for oneshot-debounce integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::Cell;
use oneshot_debounce::{EdgeLatch, EdgeSource, Indicator, RearmTask, TimeSource};

// ============================================================================
// Mock Edge Source
// ============================================================================

/// Enable/disable calls seen by a mock edge source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceCall {
    Arm,
    Disarm,
}

/// Mock interrupt line that records every enable bit change
pub struct MockEdgeSource {
    armed: bool,
    calls: heapless::Vec<SourceCall, 64>,
}

impl MockEdgeSource {
    pub fn new() -> Self {
        Self {
            armed: false,
            calls: heapless::Vec::new(),
        }
    }

    pub fn calls(&self) -> &[SourceCall] {
        &self.calls
    }

    pub fn arm_count(&self) -> usize {
        self.calls.iter().filter(|c| **c == SourceCall::Arm).count()
    }
}

impl EdgeSource for MockEdgeSource {
    fn arm(&mut self) {
        self.armed = true;
        let _ = self.calls.push(SourceCall::Arm);
    }

    fn disarm(&mut self) {
        self.armed = false;
        let _ = self.calls.push(SourceCall::Disarm);
    }

    fn is_armed(&self) -> bool {
        self.armed
    }
}

// ============================================================================
// Mock Indicator
// ============================================================================

/// Mock LED that records its level after every write
pub struct MockIndicator {
    lit: bool,
    history: heapless::Vec<bool, 64>,
}

impl MockIndicator {
    pub fn new() -> Self {
        Self {
            lit: false,
            history: heapless::Vec::new(),
        }
    }

    pub fn is_lit(&self) -> bool {
        self.lit
    }

    pub fn history(&self) -> &[bool] {
        &self.history
    }
}

impl Indicator for MockIndicator {
    fn on(&mut self) {
        self.lit = true;
        let _ = self.history.push(true);
    }

    fn off(&mut self) {
        self.lit = false;
        let _ = self.history.push(false);
    }

    fn toggle(&mut self) {
        self.lit = !self.lit;
        let _ = self.history.push(self.lit);
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock tick counter with controllable time
pub struct MockClock {
    ticks: Cell<u32>,
    inits: Cell<u32>,
}

impl MockClock {
    pub fn new() -> Self {
        Self {
            ticks: Cell::new(0),
            inits: Cell::new(0),
        }
    }

    pub fn set(&self, ticks: u32) {
        self.ticks.set(ticks);
    }

    /// Advance time, wrapping like a hardware counter
    pub fn advance(&self, ticks: u32) {
        self.ticks.set(self.ticks.get().wrapping_add(ticks));
    }

    pub fn init_count(&self) -> u32 {
        self.inits.get()
    }
}

impl TimeSource<u32> for MockClock {
    fn init(&self) {
        self.inits.set(self.inits.get() + 1);
    }

    fn now(&self) -> u32 {
        self.ticks.get()
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

pub type TestTask<'l> = RearmTask<'l, u32, MockEdgeSource, MockIndicator, MockIndicator>;

/// Build a task with default timing and fresh mocks
pub fn new_task(latch: &EdgeLatch) -> TestTask<'_> {
    RearmTask::new(
        latch,
        MockEdgeSource::new(),
        MockIndicator::new(),
        MockIndicator::new(),
    )
}

/// Fire the interrupt: latch the edge and disarm the line the task owns
pub fn fire_edge(latch: &EdgeLatch, task: &mut TestTask<'_>) {
    latch.on_edge(task.source_mut());
}
