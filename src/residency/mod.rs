use crate::period::{DayCount, Interval};
use crate::{generate_id, Id};
use chrono::NaiveDate;
use std::ops::Deref;
use tracing::debug;
mod errors;
pub use errors::ResidencyError;


/// A recorded residency period: an [`Interval`] plus the identifier the
/// caller uses to refer to it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Period {
    id: Id,
    interval: Interval,
}

impl Period {
    pub fn new(id: impl Into<Id>, interval: Interval) -> Self {
        Self {
            id: id.into(),
            interval,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn interval(&self) -> Interval {
        self.interval
    }

    pub fn start(&self) -> NaiveDate {
        self.interval.start()
    }

    pub fn end(&self) -> NaiveDate {
        self.interval.end()
    }

    pub fn days(&self, day_count: DayCount) -> i64 {
        self.interval.days(day_count)
    }
}

/// Collection of non-overlapping residency periods in insertion order.
///
/// The set is an immutable snapshot: every mutation returns a new set and
/// leaves `self` untouched. A candidate that overlaps any recorded period is
/// rejected, never merged.
///
/// # Transparent read access
///
/// `IntervalSet` implements `Deref<Target = [Period]>`, so `.len()`,
/// `.iter()`, `.is_empty()`, indexing etc. are available directly. The slice
/// is in insertion order; use [`IntervalSet::sorted`] or
/// [`derive_timeline`](crate::timeline::derive_timeline) for start order.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use oas_residency::period::Interval;
/// use oas_residency::residency::{IntervalSet, ResidencyError};
///
/// let d = |y, m, day| NaiveDate::from_ymd_opt(y, m, day).unwrap();
///
/// let set = IntervalSet::new()
///     .try_add(Interval::new(d(2010, 1, 1), d(2010, 12, 31)).unwrap())
///     .unwrap();
///
/// // June 2010 is already covered
/// let june = Interval::new(d(2010, 6, 1), d(2010, 6, 30)).unwrap();
/// assert!(matches!(set.try_add(june), Err(ResidencyError::Overlap { .. })));
/// assert_eq!(set.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Period>", into = "Vec<Period>")
)]
pub struct IntervalSet {
    periods: Vec<Period>,
}

impl IntervalSet {
    pub fn new() -> Self {
        Self {
            periods: Vec::new(),
        }
    }

    /// Returns true if a period with `id` exists.
    pub fn contains_period(&self, id: &str) -> bool {
        self.periods.iter().any(|p| p.id == id)
    }

    /// Gets the period with `id` (if present).
    pub fn get(&self, id: &str) -> Option<&Period> {
        self.periods.iter().find(|p| p.id == id)
    }

    /// Iterates over all recorded periods that overlap `candidate`.
    pub fn conflicts<'a>(
        &'a self,
        candidate: &'a Interval,
    ) -> impl Iterator<Item = &'a Period> + 'a {
        self.periods
            .iter()
            .filter(move |p| p.interval.overlaps(candidate))
    }

    /// Checks if `candidate` can be added without conflicts.
    pub fn is_free(&self, candidate: &Interval) -> bool {
        self.conflicts(candidate).next().is_none()
    }

    /// Returns a new set with `candidate` appended under a fresh id.
    ///
    /// # Errors
    ///
    /// [`ResidencyError::Overlap`] naming the first conflicting period.
    pub fn try_add(&self, candidate: Interval) -> Result<Self, ResidencyError> {
        self.try_add_with_id(generate_id(), candidate)
    }

    /// Returns a new set with `candidate` appended under `id`.
    ///
    /// Requires:
    /// - `id` not already present
    /// - `candidate` does not overlap any recorded period
    pub fn try_add_with_id(
        &self,
        id: impl Into<Id>,
        candidate: Interval,
    ) -> Result<Self, ResidencyError> {
        let id: Id = id.into();
        if self.contains_period(&id) {
            return Err(ResidencyError::DuplicateId(id));
        }

        if let Some(existing) = self.conflicts(&candidate).next() {
            debug!(
                candidate = %candidate,
                existing_id = %existing.id,
                existing = %existing.interval,
                "rejected overlapping residency period"
            );
            return Err(ResidencyError::Overlap {
                candidate,
                existing_id: existing.id.clone(),
                existing: existing.interval,
            });
        }

        debug!(id = %id, interval = %candidate, "recorded residency period");
        let mut periods = Vec::with_capacity(self.periods.len() + 1);
        periods.extend_from_slice(&self.periods);
        periods.push(Period {
            id,
            interval: candidate,
        });
        Ok(Self { periods })
    }

    /// Adds every interval in order, stopping at the first rejection.
    pub fn try_extend<I>(&self, intervals: I) -> Result<Self, ResidencyError>
    where
        I: IntoIterator<Item = Interval>,
    {
        intervals
            .into_iter()
            .try_fold(self.clone(), |set, interval| set.try_add(interval))
    }

    /// Returns a new set without the period `id`.
    pub fn without(&self, id: &str) -> Result<Self, ResidencyError> {
        if !self.contains_period(id) {
            return Err(ResidencyError::UnknownPeriod(id.to_string()));
        }
        let periods = self
            .periods
            .iter()
            .filter(|p| p.id != id)
            .cloned()
            .collect();
        Ok(Self { periods })
    }

    /// Returns an iterator over intervals in insertion order.
    pub fn intervals(&self) -> impl Iterator<Item = Interval> + '_ {
        self.periods.iter().map(|p| p.interval)
    }

    /// Periods sorted by start date. Sorting is stable.
    pub fn sorted(&self) -> Vec<Period> {
        let mut periods = self.periods.clone();
        periods.sort_by_key(|p| p.interval.start());
        periods
    }

    /// Sum of all period lengths under `day_count`.
    ///
    /// Note: this does NOT account for gaps between periods.
    pub fn total_days(&self, day_count: DayCount) -> i64 {
        self.periods.iter().map(|p| p.days(day_count)).sum()
    }

    /// Returns the earliest start date in the set, if any.
    pub fn earliest_start(&self) -> Option<NaiveDate> {
        self.periods.iter().map(|p| p.start()).min()
    }

    /// Returns the latest end date in the set, if any.
    pub fn latest_end(&self) -> Option<NaiveDate> {
        self.periods.iter().map(|p| p.end()).max()
    }
}

impl Deref for IntervalSet {
    type Target = [Period];

    fn deref(&self) -> &[Period] {
        &self.periods
    }
}

impl<'a> IntoIterator for &'a IntervalSet {
    type Item = &'a Period;
    type IntoIter = std::slice::Iter<'a, Period>;

    fn into_iter(self) -> Self::IntoIter {
        self.periods.iter()
    }
}

/// Replays the periods through [`IntervalSet::try_add_with_id`], so the
/// result satisfies the same invariants as an incrementally built set.
impl TryFrom<Vec<Period>> for IntervalSet {
    type Error = ResidencyError;

    fn try_from(periods: Vec<Period>) -> Result<Self, Self::Error> {
        periods
            .into_iter()
            .try_fold(IntervalSet::new(), |set, period| {
                set.try_add_with_id(period.id, period.interval)
            })
    }
}

impl From<IntervalSet> for Vec<Period> {
    fn from(set: IntervalSet) -> Self {
        set.periods
    }
}
