#![no_std]
#![no_main]

mod hardware_setup;

use cortex_m::peripheral::NVIC;
use cortex_m_rt::entry;
use panic_halt as _;
use rtt_target::{rprintln, rtt_init_print};
use stm32f0xx_hal::pac::{self, interrupt};

use oneshot_debounce::{EdgeLatch, RearmTask, TimeSource};
use stm32f0_demos::exti::ExtiLine13;
use stm32f0_demos::time_source::HalTimeSource;

/// Set by the EXTI handler, consumed by the rearm task
static BUTTON: EdgeLatch = EdgeLatch::new();

/// SysTick interrupt handler - called every 1ms
#[cortex_m_rt::exception]
fn SysTick() {
    stm32f0_demos::time_source::tick();
}

/// Button falling edge: latch it and mask the line until the window passes
#[interrupt]
fn EXTI4_15() {
    let mut line = ExtiLine13;
    BUTTON.on_edge(&mut line);
    line.clear_pending();
}

#[entry]
fn main() -> ! {
    rtt_init_print!();
    rprintln!("=== oneshot-debounce button demo ===");

    let hw = hardware_setup::init_hardware();

    let clock = HalTimeSource::new();
    clock.init();

    let mut task: RearmTask<'static, u32, _, _, _> =
        RearmTask::new(&BUTTON, hw.button_line, hw.status_led, hw.heartbeat_led);

    // SAFETY: the handler only touches the latch and EXTI13 registers.
    unsafe { NVIC::unmask(pac::Interrupt::EXTI4_15) };

    rprintln!("=== System Ready ===");
    rprintln!("Press the user button; it is ignored for 2 s after each press.");

    loop {
        let events = task.service(&clock);

        if events.captured {
            let stats = task.stats();
            rprintln!(
                "Press #{} at {} ms{}",
                stats.edges_captured,
                clock.now(),
                if events.extended { " (window restarted)" } else { "" }
            );
        }

        if events.rearmed {
            rprintln!("Button re-armed at {} ms", clock.now());
        }
    }
}
