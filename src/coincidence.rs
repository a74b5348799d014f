//! Edge-triggered detection of equal counters.
//!
//! ```text
//!            equal / toggle alarm
//!   Idle ──────────────────────────► Matched
//!    ▲                                 │ equal: nothing
//!    └──────────── not equal ──────────┘
//! ```
//!
//! The alarm flips on every new match instead of latching on, so repeated
//! coincidences show up as an alternating indicator.

use crate::nibble::Nibble;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MatchState {
    Idle,
    Matched,
}

/// What the caller has to do after one observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Coincidence {
    /// Counters differ, or the current match was already handled.
    Quiet,
    /// Counters just became equal. The alarm now has the given level and the
    /// automatic counter must be reset.
    New { alarm: bool },
}

#[derive(Debug, Clone, Copy)]
pub struct CoincidenceDetector {
    state: MatchState,
    alarm: bool,
}

impl CoincidenceDetector {
    pub const fn new() -> Self {
        Self {
            state: MatchState::Idle,
            alarm: false,
        }
    }

    pub fn observe(&mut self, manual: Nibble, auto: Nibble) -> Coincidence {
        match (self.state, manual == auto) {
            (MatchState::Idle, true) => {
                self.alarm = !self.alarm;
                self.state = MatchState::Matched;
                Coincidence::New { alarm: self.alarm }
            }
            (MatchState::Matched, true) => Coincidence::Quiet,
            (_, false) => {
                self.state = MatchState::Idle;
                Coincidence::Quiet
            }
        }
    }

    pub fn alarm(&self) -> bool {
        self.alarm
    }

    #[cfg(test)]
    fn state(&self) -> MatchState {
        self.state
    }
}

impl Default for CoincidenceDetector {
    fn default() -> Self {
        Self::new()
    }
}
