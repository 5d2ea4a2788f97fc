use core::cell::Cell;
use critical_section::Mutex;
use oneshot_debounce::TimeSource;

/// Global millisecond counter incremented by SysTick interrupt
///
/// Wraps after ~49.7 days of continuous operation, which the debounce logic
/// tolerates since all comparisons use wrapping subtraction.
static MILLIS_COUNTER: Mutex<Cell<u32>> = Mutex::new(Cell::new(0));

/// Increments the global millisecond counter.
///
/// Call from the SysTick exception handler every 1ms.
pub fn tick() {
    critical_section::with(|cs| {
        let counter = MILLIS_COUNTER.borrow(cs);
        counter.set(counter.get().wrapping_add(1));
    });
}

/// Millisecond time source backed by the SysTick counter
///
/// Instants are plain `u32` millisecond counts.
pub struct HalTimeSource;

impl HalTimeSource {
    pub fn new() -> Self {
        Self
    }
}

impl TimeSource<u32> for HalTimeSource {
    fn now(&self) -> u32 {
        critical_section::with(|cs| MILLIS_COUNTER.borrow(cs).get())
    }
}
