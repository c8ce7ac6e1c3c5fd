//! Fixed-interval step scheduler.
//!
//! The simulation core is purely request-driven; this clock is the explicit
//! scheduler that gates `step()` calls to a wall-clock cadence. It holds no
//! OS clock of its own - callers feed it a monotonic millisecond timestamp.

#[derive(Debug, Clone)]
pub struct StepClock {
    interval_ms: u64,
    last_ms: Option<u64>,
}

impl StepClock {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            last_ms: None,
        }
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Number of whole intervals elapsed since the last due step.
    ///
    /// The first call primes the clock and returns 0. The remainder below a
    /// whole interval carries over, so cadence does not drift with uneven
    /// polling.
    pub fn due(&mut self, now_ms: u64) -> u64 {
        let last = match self.last_ms {
            Some(last) => last,
            None => {
                self.last_ms = Some(now_ms);
                return 0;
            }
        };

        let elapsed = now_ms.saturating_sub(last);
        let steps = elapsed / self.interval_ms;
        if steps > 0 {
            self.last_ms = Some(last + steps * self.interval_ms);
        }
        steps
    }

    /// Drop accumulated time, e.g. when resuming from pause, so the caller
    /// does not get a burst of catch-up steps.
    pub fn resync(&mut self) {
        self.last_ms = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_call_primes_without_steps() {
        let mut clock = StepClock::new(100);
        assert_eq!(clock.due(1_000), 0);
        assert_eq!(clock.due(1_050), 0);
        assert_eq!(clock.due(1_100), 1);
    }

    #[test]
    fn test_remainder_carries_over() {
        let mut clock = StepClock::new(100);
        clock.due(0);
        assert_eq!(clock.due(150), 1);
        // 50ms already banked; another 50ms completes the next interval.
        assert_eq!(clock.due(200), 1);
    }

    #[test]
    fn test_multiple_intervals_reported_at_once() {
        let mut clock = StepClock::new(100);
        clock.due(0);
        assert_eq!(clock.due(350), 3);
        assert_eq!(clock.due(360), 0);
    }

    #[test]
    fn test_resync_discards_backlog() {
        let mut clock = StepClock::new(100);
        clock.due(0);
        clock.resync();
        assert_eq!(clock.due(10_000), 0);
        assert_eq!(clock.due(10_100), 1);
    }
}
