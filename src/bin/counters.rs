//! STM32F103 Blue Pill Dual Counter Panel with Coincidence Alarm
//! =============================================================================================
//!
//! Two 4-bit counters, each shown on four LEDs:
//! - manual counter: stepped up/down by two push buttons
//! - automatic counter: stepped up every 250 ms
//!
//! When both counters become equal the alarm LED toggles and the automatic
//! counter restarts from zero. Touching the pad also restarts it.
//!
//! Hardware Connections:
//!   Buttons (to GND, internal pull-up)
//!      INC  -> PB12
//!      DEC  -> PB13
//!
//!   Touch pad
//!      PAD  -> PA0 (1 MΩ to 3V3)
//!
//!   Manual counter LEDs (bit0..bit3, active high)
//!      PA4, PA5, PA6, PA7
//!
//!   Automatic counter LEDs (bit0..bit3, active high)
//!      PB0, PB1, PB10, PB11
//!
//!   Alarm LED (active high)
//!      PB5
//!
//! Execution model:
//! - Thread mode runs the blocking control loop forever.
//! - Button edges and the periodic tick are handled by tasks on an interrupt
//!   executor (USART3 vector, unused on this board). They preempt the loop and
//!   only raise latches, so they keep running during the touch settle stall.

#![no_std]
#![no_main]

use cortex_m_rt::entry;
use defmt::{info, unwrap};
use embassy_executor::InterruptExecutor;
use embassy_stm32::{
    exti::ExtiInput,
    gpio::{Flex, Level, Output, Pull, Speed},
    interrupt,
    interrupt::{InterruptExt, Priority},
};
use embassy_time::{Delay, Duration, Instant, Ticker};
use {defmt_rtt as _, panic_probe as _};

use counter_panel::{
    config::Timing,
    controller::{ControlLoop, Panel},
    display::NibbleDisplay,
    hardware::{
        gpio_button::GpioButton,
        gpio_led::{GpioLed, Polarity},
        touch_pad::TouchPad,
    },
    latch::{Latches, SignalLatch},
};

static LATCHES: Latches = Latches::new();

static EXECUTOR_IRQ: InterruptExecutor = InterruptExecutor::new();

#[interrupt]
unsafe fn USART3() {
    unsafe { EXECUTOR_IRQ.on_interrupt() }
}

/// Push-pull LED output, off at reset.
macro_rules! led {
    ($pin:expr) => {
        GpioLed::new(Output::new($pin, Level::Low, Speed::Low), Polarity::ActiveHigh)
    };
}

#[entry]
fn main() -> ! {
    let p = embassy_stm32::init(Default::default());
    info!("Counter panel starting");

    let timing = Timing::DEFAULT;

    let panel = Panel {
        manual: NibbleDisplay::new([led!(p.PA4), led!(p.PA5), led!(p.PA6), led!(p.PA7)]),
        auto: NibbleDisplay::new([led!(p.PB0), led!(p.PB1), led!(p.PB10), led!(p.PB11)]),
        alarm: led!(p.PB5),
    };

    let increment = GpioButton::new(ExtiInput::new(p.PB12, p.EXTI12, Pull::Up));
    let decrement = GpioButton::new(ExtiInput::new(p.PB13, p.EXTI13, Pull::Up));
    let mut touch = TouchPad::new(Flex::new(p.PA0), timing.touch_window);

    // Start the interrupt-side handlers
    interrupt::USART3.set_priority(Priority::P6);
    let spawner = EXECUTOR_IRQ.start(interrupt::USART3);
    unwrap!(spawner.spawn(button_task(increment, &LATCHES.increment)));
    unwrap!(spawner.spawn(button_task(decrement, &LATCHES.decrement)));
    unwrap!(spawner.spawn(tick_task(&LATCHES.tick, timing.tick_period)));

    let mut control = ControlLoop::new(panel, &timing);
    control.render();
    info!("Timing: {}", timing);

    let mut delay = Delay;
    loop {
        control.poll(Instant::now(), &LATCHES, &mut touch, &mut delay);
    }
}

/// Button Edge Task
///
/// Raises its latch on every falling edge. Debouncing is left to the loop.
#[embassy_executor::task(pool_size = 2)]
async fn button_task(mut button: GpioButton<'static>, latch: &'static SignalLatch) {
    loop {
        button.wait_for_press().await;
        latch.raise();
    }
}

/// Periodic Tick Task
///
/// Raises the tick latch once per period for the lifetime of the program.
#[embassy_executor::task]
async fn tick_task(latch: &'static SignalLatch, period: Duration) {
    let mut ticker = Ticker::every(period);
    loop {
        ticker.next().await;
        latch.raise();
    }
}
