//! The thread-mode control loop.
//!
//! [`ControlLoop::poll`] is one pass over all inputs, always in this order:
//!
//! 1. increment button latch
//! 2. decrement button latch
//! 3. tick latch
//! 4. coincidence check
//! 5. touch reset (may block for the settle time)
//!
//! The coincidence check reads the counters produced earlier in the same pass,
//! and every latch of the pass has been taken before the touch stall begins.

use embassy_time::Instant;
use embedded_hal::delay::DelayNs;

use crate::coincidence::{Coincidence, CoincidenceDetector};
use crate::config::Timing;
use crate::debounce::DebounceGate;
use crate::display::NibbleDisplay;
use crate::hardware::traits::{Led, TouchSensor};
use crate::latch::Latches;
use crate::nibble::Nibble;
use crate::touch::TouchReset;

/// The nine outputs of the board.
pub struct Panel<L> {
    pub manual: NibbleDisplay<L>,
    pub auto: NibbleDisplay<L>,
    pub alarm: L,
}

/// Outcome of one latched button event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    /// Latch was not raised.
    Idle,
    /// Counter updated.
    Accepted,
    /// Arrived within the debounce interval and was dropped.
    Debounced,
}

/// What happened during one [`ControlLoop::poll`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pass {
    pub increment: ButtonEvent,
    pub decrement: ButtonEvent,
    pub ticked: bool,
    pub coincidence: Coincidence,
    /// Raw reading that triggered a touch reset.
    pub touch: Option<u16>,
}

#[derive(Clone, Copy)]
enum Direction {
    Up,
    Down,
}

pub struct ControlLoop<L> {
    panel: Panel<L>,
    manual: Nibble,
    auto: Nibble,
    increment_gate: DebounceGate,
    decrement_gate: DebounceGate,
    detector: CoincidenceDetector,
    touch: TouchReset,
}

impl<L: Led> ControlLoop<L> {
    pub fn new(panel: Panel<L>, timing: &Timing) -> Self {
        Self {
            panel,
            manual: Nibble::ZERO,
            auto: Nibble::ZERO,
            increment_gate: DebounceGate::new(timing.debounce),
            decrement_gate: DebounceGate::new(timing.debounce),
            detector: CoincidenceDetector::new(),
            touch: TouchReset::new(timing.touch_threshold, timing.touch_settle),
        }
    }

    /// Drives every output to the current state. Called once at startup.
    pub fn render(&mut self) {
        self.panel.alarm.set(self.detector.alarm());
        self.panel.manual.show(self.manual);
        self.panel.auto.show(self.auto);
    }

    /// Runs one pass of the loop. `now` is sampled once by the caller and
    /// used for both debounce gates.
    pub fn poll<T, D>(
        &mut self,
        now: Instant,
        latches: &Latches,
        sensor: &mut T,
        delay: &mut D,
    ) -> Pass
    where
        T: TouchSensor,
        D: DelayNs,
    {
        let increment = self.on_button(latches.increment.take(), now, Direction::Up);
        let decrement = self.on_button(latches.decrement.take(), now, Direction::Down);

        let ticked = latches.tick.take();
        if ticked {
            self.set_auto(self.auto.wrapping_inc());
            trace!("auto counter: {}", self.auto);
        }

        let coincidence = self.detector.observe(self.manual, self.auto);
        if let Coincidence::New { alarm } = coincidence {
            info!("counters matched at {}, alarm {}", self.manual, alarm);
            self.panel.alarm.set(alarm);
            self.set_auto(Nibble::ZERO);
        }

        let touch = self.touch.sample(sensor);
        if let Some(reading) = touch {
            info!("touch reset (reading {})", reading);
            self.set_auto(Nibble::ZERO);
            self.touch.settle(delay);
        }

        Pass {
            increment,
            decrement,
            ticked,
            coincidence,
            touch,
        }
    }

    fn on_button(&mut self, raised: bool, now: Instant, direction: Direction) -> ButtonEvent {
        if !raised {
            return ButtonEvent::Idle;
        }

        let gate = match direction {
            Direction::Up => &mut self.increment_gate,
            Direction::Down => &mut self.decrement_gate,
        };
        if !gate.accept(now) {
            trace!("button bounce dropped");
            return ButtonEvent::Debounced;
        }

        self.manual = match direction {
            Direction::Up => self.manual.wrapping_inc(),
            Direction::Down => self.manual.wrapping_dec(),
        };
        self.panel.manual.show(self.manual);
        debug!("manual counter: {}", self.manual);
        ButtonEvent::Accepted
    }

    fn set_auto(&mut self, value: Nibble) {
        self.auto = value;
        self.panel.auto.show(value);
    }

    pub fn manual(&self) -> Nibble {
        self.manual
    }

    pub fn auto(&self) -> Nibble {
        self.auto
    }

    pub fn alarm(&self) -> bool {
        self.detector.alarm()
    }

    pub fn panel(&self) -> &Panel<L> {
        &self.panel
    }
}
