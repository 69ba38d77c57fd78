//! Day-counting conventions.

use chrono::NaiveDate;

use super::Interval;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How the days of a date range are counted.
///
/// | Convention  | `[2020-01-01, 2020-01-31]` | Gap between `…-01-31` and `…-03-01` |
/// |-------------|----------------------------|-------------------------------------|
/// | `Inclusive` | 31 days                    | `[02-01, 02-29]`, 29 days           |
/// | `Exclusive` | 30 days                    | `[01-31, 03-01]`, 30 days           |
///
/// Whichever convention is chosen must be used for totals, per-period counts
/// and gaps alike, so that recorded days plus gap days always add up to the
/// span of the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DayCount {
    /// Both endpoints are counted: `(end - start) + 1`.
    Inclusive,
    /// The range is read as half-open `[start, end)`: `end - start`.
    Exclusive,
}

impl DayCount {
    /// The convention used throughout the crate.
    pub const CANONICAL: DayCount = DayCount::Inclusive;

    /// Number of days from `start` to `end` under this convention.
    pub fn days_between(self, start: NaiveDate, end: NaiveDate) -> i64 {
        let span = end.signed_duration_since(start).num_days();
        match self {
            DayCount::Inclusive => span + 1,
            DayCount::Exclusive => span,
        }
    }

    /// Returns the gap separating a period ending on `prev_end` from one
    /// starting on `next_start`, if they are not contiguous.
    ///
    /// Under `Inclusive` the gap is the closed range of days neither period
    /// claims. Under `Exclusive` it is the half-open `[prev_end, next_start)`.
    pub fn gap_between(self, prev_end: NaiveDate, next_start: NaiveDate) -> Option<Interval> {
        match self {
            DayCount::Inclusive => {
                let start = prev_end.succ_opt()?;
                let end = next_start.pred_opt()?;
                Interval::new(start, end).ok()
            }
            DayCount::Exclusive => {
                if next_start > prev_end {
                    Interval::new(prev_end, next_start).ok()
                } else {
                    None
                }
            }
        }
    }
}

impl Default for DayCount {
    fn default() -> Self {
        Self::CANONICAL
    }
}
