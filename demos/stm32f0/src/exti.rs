//! EXTI line 13 (user button on PC13) as an edge source.

use oneshot_debounce::EdgeSource;
use stm32f0xx_hal::pac;

/// Enable bit of EXTI line 13.
///
/// Zero-sized handle: the interrupt handler and the main loop each hold their
/// own instance and reach the same registers.
pub struct ExtiLine13;

impl ExtiLine13 {
    /// Routes PC13 to EXTI13 and selects the falling edge. The line stays
    /// masked until [`EdgeSource::arm`] is called.
    pub fn configure(syscfg: &pac::SYSCFG, exti: &pac::EXTI) {
        // EXTICR4 selects the port for lines 12..15; 0b0010 is port C.
        syscfg
            .exticr4
            .modify(|_, w| unsafe { w.exti13().bits(0b0010) });
        exti.rtsr.modify(|_, w| w.tr13().clear_bit());
        exti.ftsr.modify(|_, w| w.tr13().set_bit());
        exti.imr.modify(|_, w| w.mr13().clear_bit());
    }

    /// Clears the pending flag. Call from the interrupt handler.
    pub fn clear_pending(&self) {
        // SAFETY: PR is write-1-to-clear; writing only bit 13 leaves other lines alone.
        unsafe { (*pac::EXTI::ptr()).pr.write(|w| w.pr13().set_bit()) };
    }
}

impl EdgeSource for ExtiLine13 {
    fn arm(&mut self) {
        // Bounces seen while masked still latch the pending flag; drop them
        // so unmasking does not fire immediately.
        self.clear_pending();
        cortex_m::interrupt::free(|_| {
            // SAFETY: read-modify-write of IMR inside a critical section.
            unsafe { (*pac::EXTI::ptr()).imr.modify(|_, w| w.mr13().set_bit()) };
        });
    }

    fn disarm(&mut self) {
        cortex_m::interrupt::free(|_| {
            // SAFETY: read-modify-write of IMR inside a critical section.
            unsafe { (*pac::EXTI::ptr()).imr.modify(|_, w| w.mr13().clear_bit()) };
        });
    }

    fn is_armed(&self) -> bool {
        // SAFETY: read-only access.
        unsafe { (*pac::EXTI::ptr()).imr.read().mr13().bit_is_set() }
    }
}
