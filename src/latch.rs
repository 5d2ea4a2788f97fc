//! Interrupt-side edge latch and the edge source it disarms.
//!
//! The latch is the only state shared between the interrupt handler and the
//! polling loop. The handler sets it and disarms the source; the
//! [`RearmTask`](crate::RearmTask) consumes it and re-arms the source later.

use core::sync::atomic::{AtomicBool, Ordering};

/// Trait for abstracting an edge-triggered interrupt source.
///
/// Implement this for the enable bit of your external interrupt line (EXTI
/// mask, INTx enable, GPIO interrupt enable, ...). The methods must be safe to
/// call from interrupt context and cannot fail.
pub trait EdgeSource {
    /// Allows the source to raise new edge events.
    fn arm(&mut self);

    /// Stops the source from raising edge events.
    fn disarm(&mut self);

    /// Returns true if the source may currently raise events.
    fn is_armed(&self) -> bool;
}

/// Single-bit event flag set from interrupt context.
///
/// Intended to live in a `static`:
///
/// ```
/// use oneshot_debounce::EdgeLatch;
///
/// static BUTTON: EdgeLatch = EdgeLatch::new();
///
/// assert!(!BUTTON.is_pending());
/// ```
///
/// The flag only moves false→true in [`on_edge`](Self::on_edge) and
/// true→false in [`take`](Self::take), so plain atomic loads and stores are
/// enough. No compare-and-swap is required, which keeps it usable on cores
/// without atomic read-modify-write instructions.
#[derive(Debug)]
pub struct EdgeLatch {
    pending: AtomicBool,
}

impl EdgeLatch {
    /// Creates a latch with no pending event.
    pub const fn new() -> Self {
        Self {
            pending: AtomicBool::new(false),
        }
    }

    /// Records an edge and disarms its source.
    ///
    /// Call this from the interrupt handler, once per edge. It never blocks and
    /// does not read the clock; timestamping happens in the polling task.
    #[inline]
    pub fn on_edge<S: EdgeSource + ?Sized>(&self, source: &mut S) {
        self.pending.store(true, Ordering::Release);
        source.disarm();
    }

    /// Consumes a pending event.
    ///
    /// Returns true exactly once per latched event. The flag is cleared only
    /// after it was read as set, in the same call.
    #[inline]
    pub fn take(&self) -> bool {
        if self.pending.load(Ordering::Acquire) {
            self.pending.store(false, Ordering::Release);
            true
        } else {
            false
        }
    }

    /// Returns true if an event is waiting to be consumed.
    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }
}

impl Default for EdgeLatch {
    fn default() -> Self {
        Self::new()
    }
}
