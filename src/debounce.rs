use embassy_time::{Duration, Instant};

/// Time gate for one push button.
///
/// Remembers when the last event was accepted and rejects any event that
/// arrives within `interval` of it. A rejected event does not move the gate,
/// so a burst of bounces is measured from the first accepted edge.
#[derive(Debug, Clone, Copy)]
pub struct DebounceGate {
    interval: Duration,
    last_accepted: Instant,
}

impl DebounceGate {
    /// The gate starts as if an event had been accepted at instant zero.
    pub const fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_accepted: Instant::from_ticks(0),
        }
    }

    /// Returns `true` and re-arms the gate when strictly more than the
    /// interval has passed since the last accepted event.
    pub fn accept(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last_accepted) > self.interval {
            self.last_accepted = now;
            true
        } else {
            false
        }
    }

    #[cfg(test)]
    fn last_accepted(&self) -> Instant {
        self.last_accepted
    }
}
