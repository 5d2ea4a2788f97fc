//! Time abstraction traits for platform-agnostic timing.
//!
//! The debounce logic only ever asks "how long since X?", so instants need a
//! wrap-safe `duration_since` and nothing else. Built-in implementations cover
//! plain unsigned tick counters (`u16`, `u32`, `u64`, `usize`), where the instant
//! and its duration share the same integer type.

/// Trait for abstracting time sources.
pub trait TimeSource<I: TimeInstant> {
    /// Prepares the clock for use. Must be idempotent.
    ///
    /// The default does nothing, which suits clocks that are started by
    /// hardware setup code.
    fn init(&self) {}

    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq + PartialOrd {
    /// Zero duration constant.
    const ZERO: Self;

    /// Creates a duration from a raw tick count.
    ///
    /// Values that do not fit the underlying type are truncated.
    fn from_ticks(ticks: u32) -> Self;

    /// Converts the duration to raw ticks.
    fn as_ticks(&self) -> u64;
}

/// Trait abstraction for instant types.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// The clock's reset value.
    const ZERO: Self;

    /// Calculates the duration since an earlier instant.
    ///
    /// Implementations must use modular (wrapping) subtraction so that an
    /// instant taken just after the counter wraps still yields a small
    /// duration relative to one taken just before it.
    fn duration_since(&self, earlier: Self) -> Self::Duration;
}

macro_rules! impl_tick_counter {
    ($($ty:ty),*) => {
        $(
            impl TimeDuration for $ty {
                const ZERO: Self = 0;

                #[inline]
                fn from_ticks(ticks: u32) -> Self {
                    ticks as $ty
                }

                #[inline]
                fn as_ticks(&self) -> u64 {
                    *self as u64
                }
            }

            impl TimeInstant for $ty {
                type Duration = $ty;

                const ZERO: Self = 0;

                #[inline]
                fn duration_since(&self, earlier: Self) -> Self::Duration {
                    self.wrapping_sub(earlier)
                }
            }
        )*
    };
}

impl_tick_counter!(u16, u32, u64, usize);
