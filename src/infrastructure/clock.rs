//! Time source for entry stamps

use chrono::{DateTime, NaiveDate, TimeDelta, Utc};
use std::cell::Cell;

/// Provides the current time. Swapped out in tests for deterministic stamps.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;

    /// Milliseconds since the Unix epoch
    fn now_millis(&self) -> i64 {
        self.now().timestamp_millis()
    }

    /// Current calendar date (UTC)
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at one instant
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Clock that moves forward by `step` every time it is read
pub struct SteppingClock {
    next: Cell<DateTime<Utc>>,
    step: TimeDelta,
}

impl SteppingClock {
    pub fn new(start: DateTime<Utc>, step: TimeDelta) -> Self {
        SteppingClock {
            next: Cell::new(start),
            step,
        }
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let current = self.next.get();
        self.next.set(current + self.step);
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_fixed_clock() {
        let at = Utc.with_ymd_and_hms(2024, 6, 5, 12, 0, 0).unwrap();
        let clock = FixedClock(at);
        assert_eq!(clock.now_millis(), at.timestamp_millis());
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2024, 6, 5).unwrap());
    }

    #[test]
    fn test_stepping_clock_advances() {
        let at = Utc.with_ymd_and_hms(2024, 6, 5, 12, 0, 0).unwrap();
        let clock = SteppingClock::new(at, TimeDelta::seconds(1));
        let first = clock.now_millis();
        let second = clock.now_millis();
        assert_eq!(second - first, 1000);
    }
}
