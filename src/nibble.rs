/// A 4-bit unsigned counter value.
///
/// Always in `0..=15`; every operation wraps modulo 16, so decrementing zero
/// yields fifteen and incrementing fifteen yields zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Nibble(u8);

impl Nibble {
    pub const ZERO: Self = Self(0);
    pub const MAX: Self = Self(0x0F);

    /// Builds a nibble from the low four bits of `value`.
    pub const fn new(value: u8) -> Self {
        Self(value & 0x0F)
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    pub const fn wrapping_inc(self) -> Self {
        Self::new(self.0.wrapping_add(1))
    }

    pub const fn wrapping_dec(self) -> Self {
        Self::new(self.0.wrapping_sub(1))
    }

    /// State of bit `index` (0 = least significant).
    pub const fn bit(self, index: u8) -> bool {
        (self.0 >> index) & 0x01 != 0
    }

    /// The four bits, least significant first.
    pub const fn bits(self) -> [bool; 4] {
        [self.bit(0), self.bit(1), self.bit(2), self.bit(3)]
    }
}
