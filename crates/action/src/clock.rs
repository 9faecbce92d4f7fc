use std::fmt;

use chrono::{DateTime, FixedOffset, Local, NaiveDate};

/// Source of the current instant.
///
/// Actions that derive dates ("today", "N days ago") read the clock from
/// their context so the instant can be pinned in tests.
pub trait Clock: Send + Sync + fmt::Debug {
    /// The current instant in the invocation's local offset.
    fn now(&self) -> DateTime<FixedOffset>;

    /// The current local calendar date.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// The machine's wall clock in its local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(DateTime<FixedOffset>);

impl FixedClock {
    #[must_use]
    pub fn new(instant: DateTime<FixedOffset>) -> Self {
        Self(instant)
    }

    /// Parse an RFC 3339 timestamp such as `2024-03-05T09:30:00+01:00`.
    pub fn parse(rfc3339: &str) -> Result<Self, chrono::ParseError> {
        DateTime::parse_from_rfc3339(rfc3339).map(Self)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}
