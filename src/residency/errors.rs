use chrono::NaiveDate;
use thiserror::Error;

use crate::period::Interval;
use crate::Id;

/// Reasons a residency period cannot be recorded.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResidencyError {
    /// Start date falls after the end date
    #[error("Invalid range: start {start} is after end {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    /// Candidate intersects a period already in the set
    #[error("Residency period {candidate} overlaps with existing period {existing_id} {existing}")]
    Overlap {
        candidate: Interval,
        existing_id: Id,
        existing: Interval,
    },

    /// Period ID is already present in the set
    #[error("Period ID already exists: {0}")]
    DuplicateId(Id),

    /// Period ID was not found in the set
    #[error("Period ID not found: {0}")]
    UnknownPeriod(Id),
}
