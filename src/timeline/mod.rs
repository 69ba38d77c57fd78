//! Canonical residency timeline: periods in start order and the gaps between
//! them.
//!
//! A [`Timeline`] is a read-only view derived from an
//! [`IntervalSet`](crate::residency::IntervalSet) snapshot. Deriving it never
//! touches the set, so it is safe to recompute on every call.

mod gap;

pub use gap::Gap;

use chrono::NaiveDate;

use crate::period::{DayCount, Interval};
use crate::residency::{IntervalSet, Period};

/// Sorted periods and the gaps separating them, under one [`DayCount`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Timeline {
    periods: Vec<Period>,
    gaps: Vec<Gap>,
    day_count: DayCount,
}

/// Derives the timeline of `set` under the canonical day-count convention.
pub fn derive_timeline(set: &IntervalSet) -> Timeline {
    derive_timeline_with(set, DayCount::CANONICAL)
}

/// Derives the timeline of `set` under `day_count`.
///
/// Periods are stably sorted by start; a [`Gap`] is emitted between each
/// adjacent pair that is not contiguous under `day_count`.
pub fn derive_timeline_with(set: &IntervalSet, day_count: DayCount) -> Timeline {
    let periods = set.sorted();
    let gaps = periods
        .windows(2)
        .filter_map(|w| day_count.gap_between(w[0].end(), w[1].start()))
        .map(|interval| Gap::new(interval, day_count))
        .collect();
    Timeline {
        periods,
        gaps,
        day_count,
    }
}

impl Timeline {
    pub fn day_count(&self) -> DayCount {
        self.day_count
    }

    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    /// Periods in start order.
    pub fn periods(&self) -> &[Period] {
        &self.periods
    }

    /// Intervals in start order.
    pub fn intervals(&self) -> impl Iterator<Item = Interval> + '_ {
        self.periods.iter().map(|p| p.interval())
    }

    pub fn gaps(&self) -> &[Gap] {
        &self.gaps
    }

    pub fn first_start(&self) -> Option<NaiveDate> {
        self.periods.first().map(|p| p.start())
    }

    pub fn last_end(&self) -> Option<NaiveDate> {
        self.periods.last().map(|p| p.end())
    }

    /// Days covered by the recorded periods.
    pub fn total_days(&self) -> i64 {
        self.periods.iter().map(|p| p.days(self.day_count)).sum()
    }

    /// Days covered by the gaps.
    pub fn total_gap_days(&self) -> i64 {
        self.gaps.iter().map(Gap::days).sum()
    }

    /// Days from the first start to the last end; 0 for an empty timeline.
    ///
    /// Always equals `total_days() + total_gap_days()`.
    pub fn span_days(&self) -> i64 {
        match (self.first_start(), self.last_end()) {
            (Some(start), Some(end)) => self.day_count.days_between(start, end),
            _ => 0,
        }
    }

    /// Intervals in start order restricted to dates on or after `cutoff`.
    ///
    /// Periods ending before `cutoff` are dropped; the one straddling it is
    /// shortened.
    pub fn clipped_from(&self, cutoff: NaiveDate) -> Vec<Interval> {
        self.intervals()
            .filter_map(|interval| interval.clip_start(cutoff))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn iv(start: NaiveDate, end: NaiveDate) -> Interval {
        Interval::new(start, end).unwrap()
    }

    fn set_of(intervals: Vec<Interval>) -> IntervalSet {
        IntervalSet::new().try_extend(intervals).unwrap()
    }

    #[test]
    fn empty_set_has_empty_timeline() {
        let timeline = derive_timeline(&IntervalSet::new());
        assert!(timeline.is_empty());
        assert!(timeline.gaps().is_empty());
        assert_eq!(timeline.total_days(), 0);
        assert_eq!(timeline.total_gap_days(), 0);
        assert_eq!(timeline.span_days(), 0);
        assert_eq!(timeline.first_start(), None);
    }

    #[test]
    fn single_gap_between_two_years() {
        let set = set_of(vec![
            iv(d(2000, 1, 1), d(2000, 12, 31)),
            iv(d(2005, 1, 1), d(2005, 12, 31)),
        ]);
        let timeline = derive_timeline(&set);

        assert_eq!(timeline.gaps().len(), 1);
        let gap = timeline.gaps()[0];
        assert_eq!(gap.start(), d(2001, 1, 1));
        assert_eq!(gap.end(), d(2004, 12, 31));
        assert_eq!(gap.days(), 366 + 365 + 365 + 365);
        assert_eq!(gap.day_count(), DayCount::Inclusive);
    }

    #[test]
    fn periods_are_sorted_by_start() {
        let set = set_of(vec![
            iv(d(2010, 1, 1), d(2010, 12, 31)),
            iv(d(1990, 1, 1), d(1990, 12, 31)),
            iv(d(2000, 1, 1), d(2000, 12, 31)),
        ]);
        let timeline = derive_timeline(&set);
        let starts: Vec<NaiveDate> = timeline.intervals().map(|i| i.start()).collect();
        assert_eq!(starts, vec![d(1990, 1, 1), d(2000, 1, 1), d(2010, 1, 1)]);
        assert_eq!(timeline.gaps().len(), 2);
        // Insertion order of the source set is left alone.
        assert_eq!(set[0].start(), d(2010, 1, 1));
    }

    #[test]
    fn adjacent_periods_produce_no_gap() {
        let set = set_of(vec![
            iv(d(2000, 1, 1), d(2000, 12, 31)),
            iv(d(2001, 1, 1), d(2001, 12, 31)),
        ]);
        let timeline = derive_timeline(&set);
        assert!(timeline.gaps().is_empty());
        assert_eq!(timeline.span_days(), timeline.total_days());
    }

    #[test]
    fn one_day_gap() {
        let set = set_of(vec![
            iv(d(2000, 1, 1), d(2000, 12, 30)),
            iv(d(2001, 1, 1), d(2001, 12, 31)),
        ]);
        let timeline = derive_timeline(&set);
        assert_eq!(timeline.gaps().len(), 1);
        assert_eq!(timeline.gaps()[0].start(), d(2000, 12, 31));
        assert_eq!(timeline.gaps()[0].end(), d(2000, 12, 31));
        assert_eq!(timeline.total_gap_days(), 1);
    }

    #[test]
    fn exclusive_convention_uses_half_open_gaps() {
        let set = set_of(vec![
            iv(d(2000, 1, 1), d(2001, 1, 1)),
            iv(d(2002, 1, 1), d(2003, 1, 1)),
        ]);
        let timeline = derive_timeline_with(&set, DayCount::Exclusive);
        assert_eq!(timeline.day_count(), DayCount::Exclusive);
        assert_eq!(timeline.gaps().len(), 1);
        assert_eq!(timeline.gaps()[0].start(), d(2001, 1, 1));
        assert_eq!(timeline.gaps()[0].end(), d(2002, 1, 1));
        assert_eq!(timeline.gaps()[0].to_string(), "gap [2001-01-01, 2002-01-01)");
        assert_eq!(timeline.total_days(), 366 + 365);
        assert_eq!(timeline.total_gap_days(), 365);
        assert_eq!(timeline.span_days(), 366 + 365 + 365);
    }

    #[test]
    fn exclusive_gap_keeps_its_own_convention() {
        // Closed periods on consecutive days; read half-open they leave
        // 2000-12-31 unclaimed.
        let set = set_of(vec![
            iv(d(2000, 1, 1), d(2000, 12, 31)),
            iv(d(2001, 1, 1), d(2001, 12, 31)),
        ]);
        let timeline = derive_timeline_with(&set, DayCount::Exclusive);
        assert_eq!(timeline.gaps().len(), 1);

        let gap = timeline.gaps()[0];
        assert_eq!(gap.day_count(), DayCount::Exclusive);
        assert_eq!(gap.days(), 1);
        assert_eq!(gap.to_string(), "gap [2000-12-31, 2001-01-01)");
        assert_eq!(
            timeline.total_days() + timeline.total_gap_days(),
            timeline.span_days()
        );

        // The same set read inclusively is contiguous.
        assert!(derive_timeline(&set).gaps().is_empty());
    }

    #[test]
    fn clipped_from_drops_and_shortens() {
        let set = set_of(vec![
            iv(d(1970, 1, 1), d(1972, 12, 31)),
            iv(d(1975, 1, 1), d(1980, 1, 1)),
            iv(d(1985, 1, 1), d(1985, 12, 31)),
        ]);
        let timeline = derive_timeline(&set);
        assert_eq!(
            timeline.clipped_from(d(1976, 1, 1)),
            vec![
                iv(d(1976, 1, 1), d(1980, 1, 1)),
                iv(d(1985, 1, 1), d(1985, 12, 31)),
            ]
        );
    }

    #[test]
    fn recorded_plus_gap_days_equal_span_for_random_sets() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..300 {
            let mut intervals = Vec::new();
            let mut cursor = d(1940, 1, 1);
            for _ in 0..rng.gen_range(1..10) {
                let start = cursor + chrono::Days::new(rng.gen_range(0..1200));
                let end = start + chrono::Days::new(rng.gen_range(0..4000));
                intervals.push(iv(start, end));
                cursor = end + chrono::Days::new(1);
            }
            intervals.reverse();
            let set = set_of(intervals);

            let inclusive = derive_timeline(&set);
            let (first, last) = (inclusive.first_start().unwrap(), inclusive.last_end().unwrap());
            assert_eq!(
                inclusive.total_days() + inclusive.total_gap_days(),
                last.signed_duration_since(first).num_days() + 1
            );
            assert_eq!(inclusive.total_days(), set.total_days(DayCount::Inclusive));

            let exclusive = derive_timeline_with(&set, DayCount::Exclusive);
            assert_eq!(
                exclusive.total_days() + exclusive.total_gap_days(),
                last.signed_duration_since(first).num_days()
            );
        }
    }
}
