use embassy_time::Duration;

/// Timing and threshold parameters of the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Timing {
    /// Minimum spacing between two accepted presses of the same button.
    /// An event is accepted only when strictly more than this has elapsed.
    pub debounce: Duration,
    /// Period of the automatic counter tick.
    pub tick_period: Duration,
    /// Raw touch readings strictly below this count as a touch.
    pub touch_threshold: u16,
    /// Blocking pause after a touch reset.
    pub touch_settle: Duration,
    /// Measurement window of one touch reading.
    pub touch_window: Duration,
}

impl Timing {
    pub const DEFAULT: Self = Self {
        debounce: Duration::from_millis(50),
        tick_period: Duration::from_millis(250),
        touch_threshold: 30,
        touch_settle: Duration::from_millis(200),
        touch_window: Duration::from_millis(1),
    };
}

impl Default for Timing {
    fn default() -> Self {
        Self::DEFAULT
    }
}
