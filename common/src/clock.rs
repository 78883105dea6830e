use std::cell::Cell;
use std::rc::Rc;

use chrono::{DateTime, FixedOffset, Local, TimeDelta};

/// A source of wall clock time.
pub trait Clock {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// The host's clock in its local timezone.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// A clock that only moves when told to. Clones share the same time.
#[derive(Clone, Debug)]
pub struct ManualClock(Rc<Cell<DateTime<FixedOffset>>>);

impl ManualClock {
    pub fn new(start: DateTime<FixedOffset>) -> Self {
        Self(Rc::new(Cell::new(start)))
    }

    pub fn advance(&self, by: TimeDelta) {
        self.0.set(self.0.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_manual_clock_clones_share_time() {
        let start = FixedOffset::east_opt(3600)
            .unwrap()
            .with_ymd_and_hms(2025, 3, 13, 8, 0, 0)
            .unwrap();
        let clock = ManualClock::new(start);
        let handle = clock.clone();

        handle.advance(TimeDelta::seconds(90));

        assert_eq!(clock.now(), start + TimeDelta::seconds(90));
    }

    #[test]
    fn test_system_clock_is_local() {
        let offset = SystemClock.now().offset().local_minus_utc();
        assert_eq!(offset, Local::now().offset().local_minus_utc());
    }
}
