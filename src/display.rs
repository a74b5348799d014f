use crate::hardware::traits::Led;
use crate::nibble::Nibble;

/// Four LEDs showing a [`Nibble`], least significant bit on the first LED.
pub struct NibbleDisplay<L> {
    leds: [L; 4],
}

impl<L: Led> NibbleDisplay<L> {
    /// `leds[0]` shows bit 0, `leds[3]` shows bit 3.
    pub fn new(leds: [L; 4]) -> Self {
        Self { leds }
    }

    pub fn show(&mut self, value: Nibble) {
        for (led, lit) in self.leds.iter_mut().zip(value.bits()) {
            led.set(lit);
        }
    }

    pub fn leds(&self) -> &[L; 4] {
        &self.leds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct FakeLed {
        lit: bool,
        writes: u32,
    }

    impl Led for FakeLed {
        fn on(&mut self) {
            self.lit = true;
            self.writes += 1;
        }

        fn off(&mut self) {
            self.lit = false;
            self.writes += 1;
        }

        fn toggle(&mut self) {
            self.lit = !self.lit;
            self.writes += 1;
        }
    }

    fn pattern(display: &NibbleDisplay<FakeLed>) -> [bool; 4] {
        let leds = display.leds();
        [leds[0].lit, leds[1].lit, leds[2].lit, leds[3].lit]
    }

    #[test]
    fn shows_bits_lsb_first() {
        let mut display = NibbleDisplay::new(Default::default());
        display.show(Nibble::new(0b0110));
        assert_eq!(pattern(&display), [false, true, true, false]);
        display.show(Nibble::new(0b1001));
        assert_eq!(pattern(&display), [true, false, false, true]);
    }

    #[test]
    fn fifteen_lights_everything_and_zero_clears() {
        let mut display = NibbleDisplay::new(Default::default());
        display.show(Nibble::MAX);
        assert_eq!(pattern(&display), [true; 4]);
        display.show(Nibble::ZERO);
        assert_eq!(pattern(&display), [false; 4]);
    }

    #[test]
    fn every_led_is_written_on_each_show() {
        let mut display: NibbleDisplay<FakeLed> = NibbleDisplay::new(Default::default());
        display.show(Nibble::new(5));
        display.show(Nibble::new(5));
        assert!(display.leds().iter().all(|led| led.writes == 2));
    }
}
