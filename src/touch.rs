use embassy_time::Duration;
use embedded_hal::delay::DelayNs;

use crate::hardware::traits::TouchSensor;

/// Touch-to-reset input with a blocking settle pause.
///
/// Unlike the buttons this input is debounced by stalling: after a touch is
/// seen the whole control loop sleeps for `settle`, during which only
/// interrupt-side handlers run.
#[derive(Debug, Clone, Copy)]
pub struct TouchReset {
    threshold: u16,
    settle: Duration,
}

impl TouchReset {
    pub const fn new(threshold: u16, settle: Duration) -> Self {
        Self { threshold, settle }
    }

    /// Samples the sensor once. Returns the reading if it counts as a touch.
    pub fn sample<T: TouchSensor>(&self, sensor: &mut T) -> Option<u16> {
        let reading = sensor.read();
        (reading < self.threshold).then_some(reading)
    }

    /// Blocks the caller for the settle interval.
    pub fn settle<D: DelayNs>(&self, delay: &mut D) {
        delay.delay_ms(u32::try_from(self.settle.as_millis()).unwrap_or(u32::MAX));
    }
}
