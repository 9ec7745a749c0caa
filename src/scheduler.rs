use std::time::{Duration, Instant};

/// Re-arming gate that paces simulation ticks.
///
/// The engine never drives itself; the owner polls the clock with the
/// session's *current* tick interval and calls `tick` when the gate opens.
/// Because the interval is read on every poll, a mid-session speed change
/// takes effect on the next re-arm rather than retroactively.
#[derive(Debug, Clone, Copy)]
pub struct TickClock {
    last_fire: Instant,
}

impl TickClock {
    /// Creates a clock armed at the current instant.
    #[must_use]
    pub fn new() -> Self {
        Self::armed_at(Instant::now())
    }

    /// Creates a clock armed at an explicit instant, for manual stepping.
    #[must_use]
    pub fn armed_at(now: Instant) -> Self {
        Self { last_fire: now }
    }

    /// Polls the gate against the current instant.
    pub fn poll(&mut self, interval: Duration) -> bool {
        self.poll_at(Instant::now(), interval)
    }

    /// Polls the gate against an explicit instant.
    ///
    /// Returns true and re-arms when at least `interval` has elapsed since
    /// the last firing.
    pub fn poll_at(&mut self, now: Instant, interval: Duration) -> bool {
        if now.duration_since(self.last_fire) >= interval {
            self.last_fire = now;
            return true;
        }
        false
    }
}

impl Default for TickClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::TickClock;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn gate_stays_closed_until_the_interval_elapses() {
        let start = Instant::now();
        let mut clock = TickClock::armed_at(start);

        assert!(!clock.poll_at(start + 49 * MS, 50 * MS));
        assert!(clock.poll_at(start + 50 * MS, 50 * MS));
    }

    #[test]
    fn firing_re_arms_the_gate() {
        let start = Instant::now();
        let mut clock = TickClock::armed_at(start);

        assert!(clock.poll_at(start + 50 * MS, 50 * MS));
        assert!(!clock.poll_at(start + 70 * MS, 50 * MS));
        assert!(clock.poll_at(start + 100 * MS, 50 * MS));
    }

    #[test]
    fn interval_change_applies_on_the_next_poll() {
        let start = Instant::now();
        let mut clock = TickClock::armed_at(start);

        // At 50ms pacing this poll would be too early; the level was raised
        // and the driver now polls with 10ms, so the gate opens.
        assert!(clock.poll_at(start + 20 * MS, 10 * MS));
        assert!(!clock.poll_at(start + 25 * MS, 10 * MS));
        assert!(clock.poll_at(start + 30 * MS, 10 * MS));
    }
}
