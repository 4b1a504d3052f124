//! Session clock: elapsed wall time and the passive health drain cadence.

use std::time::{Duration, Instant};

use crate::config::game::{HEALTH_DRAIN_PERIOD, TIME_LIMIT_SECS};

#[derive(Debug, Clone, Copy)]
pub struct SessionClock {
    started_at: Instant,
    last_drain_at: Instant,
}

impl SessionClock {
    pub fn start(now: Instant) -> Self {
        Self { started_at: now, last_drain_at: now }
    }

    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started_at)
    }

    /// Whole seconds left before the time limit, floored at zero.
    pub fn time_left_secs(&self, now: Instant) -> u64 {
        TIME_LIMIT_SECS.saturating_sub(self.elapsed(now).as_secs())
    }

    pub fn is_over_time(&self, now: Instant) -> bool {
        self.elapsed(now) > Duration::from_secs(TIME_LIMIT_SECS)
    }

    /// Returns true when a drain period has elapsed and advances the drain
    /// mark by exactly one period. Late calls catch up one period per call.
    pub fn drain_due(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last_drain_at) >= HEALTH_DRAIN_PERIOD {
            self.last_drain_at += HEALTH_DRAIN_PERIOD;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_fires_once_per_period() {
        let start = Instant::now();
        let mut clock = SessionClock::start(start);

        assert!(!clock.drain_due(start + Duration::from_secs(9)));
        assert!(clock.drain_due(start + Duration::from_secs(10)));
        assert!(!clock.drain_due(start + Duration::from_secs(11)));
        assert!(clock.drain_due(start + Duration::from_secs(20)));
    }

    #[test]
    fn test_drain_catches_up_without_drift() {
        let start = Instant::now();
        let mut clock = SessionClock::start(start);
        let late = start + Duration::from_secs(35);

        assert!(clock.drain_due(late));
        assert!(clock.drain_due(late));
        assert!(clock.drain_due(late));
        assert!(!clock.drain_due(late));

        // The mark sits on 30s, so the next one is due at 40s.
        assert!(clock.drain_due(start + Duration::from_secs(40)));
    }

    #[test]
    fn test_time_limit_is_strict() {
        let start = Instant::now();
        let clock = SessionClock::start(start);
        assert!(!clock.is_over_time(start + Duration::from_secs(TIME_LIMIT_SECS)));
        assert!(clock.is_over_time(start + Duration::from_secs(TIME_LIMIT_SECS) + Duration::from_millis(1)));
        assert_eq!(clock.time_left_secs(start + Duration::from_secs(TIME_LIMIT_SECS + 5)), 0);
    }
}
