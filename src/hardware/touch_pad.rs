use super::traits::TouchSensor;
use embassy_stm32::gpio::{Flex, Pull, Speed};
use embassy_time::{Duration, Instant};

/// Charge-transfer touch pad on a single GPIO.
///
/// The pad is pulled up to 3V3 through an external high-value resistor
/// (around 1 MΩ). One reading counts how many discharge/recharge cycles the
/// pad completes inside a fixed window. A finger adds capacitance, each
/// recharge takes longer and the count drops, so a low reading means touch.
pub struct TouchPad<'d> {
    pin: Flex<'d>,
    window: Duration,
}

impl<'d> TouchPad<'d> {
    pub fn new(pin: Flex<'d>, window: Duration) -> Self {
        Self { pin, window }
    }

    fn discharge(&mut self) {
        self.pin.set_low();
        self.pin.set_as_output(Speed::Low);
    }

    fn release(&mut self) {
        self.pin.set_as_input(Pull::None);
    }
}

impl<'d> TouchSensor for TouchPad<'d> {
    fn read(&mut self) -> u16 {
        let deadline = Instant::now() + self.window;
        let mut cycles: u16 = 0;

        while Instant::now() < deadline {
            self.discharge();
            self.release();
            while self.pin.is_low() {
                if Instant::now() >= deadline {
                    return cycles;
                }
            }
            cycles = cycles.saturating_add(1);
        }

        cycles
    }
}
