use embassy_stm32::exti::ExtiInput;

/// Push button wired to ground with the internal pull-up enabled.
pub struct GpioButton<'d> {
    pin: ExtiInput<'d>,
}

impl<'d> GpioButton<'d> {
    pub fn new(pin: ExtiInput<'d>) -> Self {
        Self { pin }
    }

    /// Resolves on the next falling edge, i.e. the moment the button closes.
    pub async fn wait_for_press(&mut self) {
        self.pin.wait_for_falling_edge().await;
    }
}
