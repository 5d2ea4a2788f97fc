use embedded_hal::digital::v2::{OutputPin, ToggleableOutputPin};
use oneshot_debounce::Indicator;

/// Single LED implementation for GPIO push-pull outputs
///
/// This wrapper implements the Indicator trait required by the rearm task,
/// handling active-high/active-low wiring. The HAL's pins are infallible, so
/// errors are discarded.
pub struct GpioLed<P>
where
    P: OutputPin + ToggleableOutputPin,
{
    pin: P,
    active_low: bool,
}

impl<P> GpioLed<P>
where
    P: OutputPin + ToggleableOutputPin,
{
    /// Create a new LED controller
    ///
    /// # Arguments
    /// * `pin` - Push-pull output driving the LED
    /// * `active_low` - true if the LED lights when the pin is low
    pub fn new(pin: P, active_low: bool) -> Self {
        Self { pin, active_low }
    }
}

impl<P> Indicator for GpioLed<P>
where
    P: OutputPin + ToggleableOutputPin,
{
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
