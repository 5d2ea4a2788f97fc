//! Status and heartbeat outputs.

use embedded_hal::digital::StatefulOutputPin;

/// Trait for abstracting a single on/off indicator (usually an LED).
///
/// Implementations handle any hardware errors internally; these methods
/// cannot fail.
pub trait Indicator {
    /// Switches the indicator on.
    fn on(&mut self);

    /// Switches the indicator off.
    fn off(&mut self);

    /// Inverts the indicator.
    fn toggle(&mut self);

    /// Switches the indicator on or off.
    #[inline]
    fn set(&mut self, lit: bool) {
        if lit { self.on() } else { self.off() }
    }
}

/// [`Indicator`] backed by an `embedded-hal` output pin.
///
/// Pin errors are discarded. With `active_low` set the pin is driven low to
/// light the indicator, as for an LED wired between the supply and the pin.
pub struct PinIndicator<P: StatefulOutputPin> {
    pin: P,
    active_low: bool,
}

impl<P: StatefulOutputPin> PinIndicator<P> {
    /// Wraps a pin driven high to light the indicator.
    pub fn new(pin: P) -> Self {
        Self {
            pin,
            active_low: false,
        }
    }

    /// Wraps a pin driven low to light the indicator.
    pub fn active_low(pin: P) -> Self {
        Self {
            pin,
            active_low: true,
        }
    }

    /// Returns the wrapped pin.
    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: StatefulOutputPin> Indicator for PinIndicator<P> {
    fn on(&mut self) {
        let _ = if self.active_low {
            self.pin.set_low()
        } else {
            self.pin.set_high()
        };
    }

    fn off(&mut self) {
        let _ = if self.active_low {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
    }

    fn toggle(&mut self) {
        let _ = self.pin.toggle();
    }
}
