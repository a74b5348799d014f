pub trait Led {
    fn on(&mut self);
    fn off(&mut self);
    fn toggle(&mut self);

    fn set(&mut self, lit: bool) {
        if lit { self.on() } else { self.off() }
    }
}

/// A capacitive touch input.
///
/// `read` returns a raw, unitless reading; lower values mean more
/// capacitance on the pad, i.e. a finger on it.
pub trait TouchSensor {
    fn read(&mut self) -> u16;
}
