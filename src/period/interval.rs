//! Closed date interval representing a claimed period of residency.

use std::fmt::Display;

use chrono::NaiveDate;

use super::DayCount;
use crate::residency::ResidencyError;

/// Closed range of calendar dates `[start, end]`.
///
/// The invariant `start <= end` is checked on construction, so every
/// `Interval` in circulation is well-formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawInterval"))]
pub struct Interval {
    start: NaiveDate,
    end: NaiveDate,
}

impl Interval {
    /// Creates interval `[start, end]`.
    ///
    /// # Errors
    ///
    /// Returns [`ResidencyError::InvalidRange`] if `start > end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, ResidencyError> {
        if start > end {
            return Err(ResidencyError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of days covered under `day_count`.
    pub fn days(&self, day_count: DayCount) -> i64 {
        day_count.days_between(self.start, self.end)
    }

    /// Returns true if `date` ∈ `[start, end]`.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Checks if this interval overlaps with another interval.
    ///
    /// Endpoints are inclusive: two intervals sharing a single day overlap.
    pub fn overlaps(&self, other: &Interval) -> bool {
        !(self.end < other.start || self.start > other.end)
    }

    /// Returns the part of this interval on or after `cutoff`, or `None` if
    /// the interval ends before it.
    pub fn clip_start(&self, cutoff: NaiveDate) -> Option<Interval> {
        let start = self.start.max(cutoff);
        if start > self.end {
            None
        } else {
            Some(Self {
                start,
                end: self.end,
            })
        }
    }
}

impl Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawInterval {
    start: NaiveDate,
    end: NaiveDate,
}

#[cfg(feature = "serde")]
impl TryFrom<RawInterval> for Interval {
    type Error = ResidencyError;

    fn try_from(raw: RawInterval) -> Result<Self, Self::Error> {
        Interval::new(raw.start, raw.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn iv(start: NaiveDate, end: NaiveDate) -> Interval {
        Interval::new(start, end).unwrap()
    }

    #[test]
    fn interval_creation() {
        let interval = iv(d(2010, 1, 1), d(2010, 12, 31));
        assert_eq!(interval.start(), d(2010, 1, 1));
        assert_eq!(interval.end(), d(2010, 12, 31));
        assert_eq!(interval.days(DayCount::Inclusive), 365);
        assert_eq!(interval.days(DayCount::Exclusive), 364);
    }

    #[test]
    fn single_day_interval() {
        let interval = iv(d(2010, 6, 1), d(2010, 6, 1));
        assert_eq!(interval.days(DayCount::Inclusive), 1);
        assert_eq!(interval.days(DayCount::Exclusive), 0);
    }

    #[test]
    fn reversed_interval_is_rejected() {
        let result = Interval::new(d(2010, 12, 31), d(2010, 1, 1));
        assert_eq!(
            result,
            Err(ResidencyError::InvalidRange {
                start: d(2010, 12, 31),
                end: d(2010, 1, 1),
            })
        );
    }

    #[test]
    fn interval_contains() {
        let interval = iv(d(2010, 1, 1), d(2010, 12, 31));
        assert!(interval.contains(d(2010, 1, 1)));
        assert!(interval.contains(d(2010, 7, 15)));
        assert!(interval.contains(d(2010, 12, 31)));
        assert!(!interval.contains(d(2011, 1, 1)));
    }

    #[test]
    fn interval_overlaps() {
        let year = iv(d(2010, 1, 1), d(2010, 12, 31));
        let june = iv(d(2010, 6, 1), d(2010, 6, 30));
        let touching = iv(d(2010, 12, 31), d(2011, 3, 1));
        let next_day = iv(d(2011, 1, 1), d(2011, 3, 1));

        assert!(year.overlaps(&june));
        assert!(june.overlaps(&year));
        assert!(year.overlaps(&touching));
        assert!(!year.overlaps(&next_day));
        assert!(!next_day.overlaps(&year));
    }

    #[test]
    fn clip_start() {
        let interval = iv(d(1975, 1, 1), d(1980, 1, 1));
        assert_eq!(
            interval.clip_start(d(1976, 1, 1)),
            Some(iv(d(1976, 1, 1), d(1980, 1, 1)))
        );
        assert_eq!(interval.clip_start(d(1970, 1, 1)), Some(interval));
        assert_eq!(
            interval.clip_start(d(1980, 1, 1)),
            Some(iv(d(1980, 1, 1), d(1980, 1, 1)))
        );
        assert_eq!(interval.clip_start(d(1980, 1, 2)), None);
    }

    #[test]
    fn display() {
        let interval = iv(d(2000, 1, 1), d(2000, 12, 31));
        assert_eq!(interval.to_string(), "[2000-01-01, 2000-12-31]");
    }
}
