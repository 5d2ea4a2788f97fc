#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`EdgeLatch`**: Interrupt-safe event flag; the handler sets it and disarms the edge source
//! - **`EdgeSource`**: Trait to implement for your external interrupt's enable bit
//! - **`Indicator`**: Trait to implement for the status and heartbeat outputs
//! - **`PinIndicator`**: Ready-made `Indicator` for any `embedded-hal` stateful output pin
//! - **`RearmTask`**: Polled task that times the debounce window and re-arms the source
//! - **`Heartbeat`**: Fixed-period toggle timer sharing the same clock
//! - **`Timing`**: Debounce window and heartbeat period, validated
//! - **`TimeSource`** / **`TimeInstant`**: Traits to implement for your tick counter
//!
//! All timing uses wrap-safe subtraction, so a free-running counter may roll
//! over at its integer width without disturbing the debounce or heartbeat.

pub mod heartbeat;
pub mod indicator;
pub mod latch;
pub mod rearm;
pub mod time;
pub mod types;

pub use heartbeat::Heartbeat;
pub use indicator::{Indicator, PinIndicator};
pub use latch::{EdgeLatch, EdgeSource};
pub use rearm::RearmTask;
pub use time::{TimeDuration, TimeInstant, TimeSource};
pub use types::{
    DEBOUNCE_WINDOW, DebounceState, DebounceStats, INTERVAL_PERIOD, TickEvents, Timing,
    TimingError,
};
