use cortex_m::peripheral::SYST;
use rtt_target::rprintln;
use stm32f0xx_hal::{
    gpio::{Floating, Input, Output, PushPull, gpioa, gpioc},
    pac,
    prelude::*,
};

use stm32f0_demos::exti::ExtiLine13;
use stm32f0_demos::led::GpioLed;

/// Heartbeat LED (onboard LD2 on PA5)
pub type HeartbeatLed = GpioLed<gpioa::PA5<Output<PushPull>>>;

/// Status LED (external LED on PA6, lit while the button is disarmed)
pub type StatusLed = GpioLed<gpioa::PA6<Output<PushPull>>>;

/// Container for all initialized hardware peripherals
pub struct HardwareContext {
    pub button_line: ExtiLine13,
    pub status_led: StatusLed,
    pub heartbeat_led: HeartbeatLed,
    // Kept alive so the pull-up configuration stays owned.
    pub _button_pin: gpioc::PC13<Input<stm32f0xx_hal::gpio::PullUp>>,
}

/// Initialize all hardware peripherals
///
/// - System clock configuration
/// - SysTick timer setup (1ms interrupts)
/// - Status and heartbeat LEDs
/// - User button on PC13, routed to EXTI13 on the falling edge (masked)
pub fn init_hardware() -> HardwareContext {
    let mut dp = pac::Peripherals::take().unwrap();
    let mut cp = cortex_m::Peripherals::take().unwrap();

    // SYSCFG clock must be on before EXTICR can be written; RCC is consumed below.
    dp.RCC.apb2enr.modify(|_, w| w.syscfgen().set_bit());

    let mut rcc = dp.RCC.configure().freeze(&mut dp.FLASH);
    rprintln!("System clock configured: {} Hz", rcc.clocks.sysclk().0);
    configure_systick(&rcc, &mut cp.SYST);

    let gpioa = dp.GPIOA.split(&mut rcc);
    let gpioc = dp.GPIOC.split(&mut rcc);

    let (status_led, heartbeat_led) = setup_leds(gpioa.pa6, gpioa.pa5);
    let button_pin = cortex_m::interrupt::free(|cs| gpioc.pc13.into_pull_up_input(cs));

    ExtiLine13::configure(&dp.SYSCFG, &dp.EXTI);
    rprintln!("Button configured on PC13 (EXTI13, falling edge)");

    HardwareContext {
        button_line: ExtiLine13,
        status_led,
        heartbeat_led,
        _button_pin: button_pin,
    }
}

/// Configure SysTick timer for 1ms interrupts
fn configure_systick(rcc: &stm32f0xx_hal::rcc::Rcc, syst: &mut SYST) {
    let sysclk_freq = rcc.clocks.sysclk();

    syst.set_clock_source(cortex_m::peripheral::syst::SystClkSource::Core);
    syst.set_reload((sysclk_freq.0 / 1_000) - 1);
    syst.clear_current();
    syst.enable_counter();
    syst.enable_interrupt();

    rprintln!("SysTick configured for 1ms interrupts");
}

/// Configure status (PA6) and heartbeat (PA5) LEDs as push-pull outputs
fn setup_leds(
    pa6: gpioa::PA6<Input<Floating>>,
    pa5: gpioa::PA5<Input<Floating>>,
) -> (StatusLed, HeartbeatLed) {
    let (status, heartbeat) = cortex_m::interrupt::free(|cs| {
        (pa6.into_push_pull_output(cs), pa5.into_push_pull_output(cs))
    });

    rprintln!("LEDs configured: status PA6, heartbeat PA5");
    (GpioLed::new(status, false), GpioLed::new(heartbeat, false))
}
