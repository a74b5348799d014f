use super::traits::Led;
use embedded_hal::digital::OutputPin;

/// Which pin level lights the LED.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// LED between pin and ground.
    ActiveHigh,
    /// LED between supply and pin, like the Blue Pill's PC13.
    ActiveLow,
}

pub struct GpioLed<P> {
    pin: P,
    polarity: Polarity,
    lit: bool,
}

impl<P: OutputPin> GpioLed<P> {
    /// Wraps a pin whose current level already corresponds to "off".
    pub fn new(pin: P, polarity: Polarity) -> Self {
        Self {
            pin,
            polarity,
            lit: false,
        }
    }

    pub fn is_lit(&self) -> bool {
        self.lit
    }

    pub fn release(self) -> P {
        self.pin
    }

    fn drive(&mut self, lit: bool) {
        let high = match self.polarity {
            Polarity::ActiveHigh => lit,
            Polarity::ActiveLow => !lit,
        };
        let written = if high {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
        match written {
            Ok(()) => self.lit = lit,
            Err(_) => debug!("LED pin write failed, keeping previous state"),
        }
    }
}

impl<P: OutputPin> Led for GpioLed<P> {
    fn on(&mut self) {
        self.drive(true);
    }

    fn off(&mut self) {
        self.drive(false);
    }

    fn toggle(&mut self) {
        self.drive(!self.lit);
    }
}
