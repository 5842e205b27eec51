//! Time source abstraction for the store.
//!
//! Instants are UTC. Calendar days ("today", a release day's midnight) are
//! taken in the user's zone through [`Clock::local_now`].

use chrono::{DateTime, Duration, FixedOffset, Local, NaiveDate, Offset, Utc};
use std::cell::Cell;

/// Supplies "now" to time-dependent store operations.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;

    /// Current time in the user's zone. Defaults to UTC.
    fn local_now(&self) -> DateTime<FixedOffset> {
        self.now().fixed_offset()
    }

    /// The user's calendar date.
    fn today(&self) -> NaiveDate {
        self.local_now().date_naive()
    }
}

/// Wall-clock time in the host's local zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn local_now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// Manually driven clock for deterministic tests and replays.
#[derive(Debug, Clone)]
pub struct FixedClock {
    now: Cell<DateTime<Utc>>,
    offset: FixedOffset,
}

impl FixedClock {
    /// A clock pinned at `now` whose user lives at UTC.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Cell::new(now),
            offset: Utc.fix(),
        }
    }

    /// Places the user at `offset` from UTC.
    pub fn with_offset(mut self, offset: FixedOffset) -> Self {
        self.offset = offset;
        self
    }

    pub fn set(&self, now: DateTime<Utc>) {
        self.now.set(now);
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now.get()
    }

    fn local_now(&self) -> DateTime<FixedOffset> {
        self.now.get().with_timezone(&self.offset)
    }
}

#[cfg(test)]
mod tests {
    use super::{Clock, FixedClock};
    use chrono::{FixedOffset, NaiveDate, TimeZone, Utc};

    #[test]
    fn today_follows_the_user_offset() {
        let now = Utc.with_ymd_and_hms(2026, 11, 1, 3, 0, 0).unwrap();

        let utc = FixedClock::new(now);
        assert_eq!(utc.today(), NaiveDate::from_ymd_opt(2026, 11, 1).unwrap());

        let pacific = FixedClock::new(now).with_offset(FixedOffset::west_opt(8 * 3600).unwrap());
        assert_eq!(pacific.today(), NaiveDate::from_ymd_opt(2026, 10, 31).unwrap());
        assert_eq!(pacific.local_now().to_utc(), now);
    }
}
