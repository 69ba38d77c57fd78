use std::fmt::Display;

use chrono::NaiveDate;

use crate::period::{DayCount, Interval};

/// A span between two recorded periods during which no residency was claimed.
///
/// A gap is bound to the [`DayCount`] of the timeline it was derived from.
/// Under `Inclusive` its bounds are both unclaimed days; under `Exclusive` it
/// is the half-open `[start, end)`, so `start` is the last day of the earlier
/// period and `end` the first day of the later one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gap {
    interval: Interval,
    day_count: DayCount,
}

impl Gap {
    pub(crate) fn new(interval: Interval, day_count: DayCount) -> Self {
        Self {
            interval,
            day_count,
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.interval.start()
    }

    pub fn end(&self) -> NaiveDate {
        self.interval.end()
    }

    pub fn interval(&self) -> Interval {
        self.interval
    }

    pub fn day_count(&self) -> DayCount {
        self.day_count
    }

    /// Unclaimed days, counted under the gap's own convention.
    pub fn days(&self) -> i64 {
        self.interval.days(self.day_count)
    }
}

impl Display for Gap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.day_count {
            DayCount::Inclusive => write!(f, "gap {}", self.interval),
            DayCount::Exclusive => write!(f, "gap [{}, {})", self.start(), self.end()),
        }
    }
}
