//! oas_residency - residency accumulation for old-age pension eligibility
//!
//! Turns user-supplied residency date ranges into a validated set of
//! non-overlapping periods, a canonical timeline with the gaps between them,
//! and an eligibility estimate based on age, legal status and days of
//! residency after the 18th birthday.
//!
//! ```
//! use chrono::NaiveDate;
//! use oas_residency::eligibility::{evaluate, CitizenshipStatus, EligibilityInput};
//! use oas_residency::period::Interval;
//! use oas_residency::residency::IntervalSet;
//!
//! let d = |y, m, day| NaiveDate::from_ymd_opt(y, m, day).unwrap();
//!
//! let set = IntervalSet::new()
//!     .try_add(Interval::new(d(1980, 1, 1), d(2023, 12, 31)).unwrap())
//!     .unwrap();
//! let input = EligibilityInput::new(d(1958, 1, 1), CitizenshipStatus::Citizen, d(2025, 1, 1));
//!
//! let result = evaluate(&input, &set);
//! assert!(result.is_eligible);
//! assert_eq!(result.eligible_days_after_18, 16071);
//! ```

pub mod eligibility;
pub mod parse;
pub mod period;
pub mod residency;
pub mod timeline;

pub use eligibility::{evaluate, EligibilityResult};
pub use timeline::{derive_timeline, Timeline};

/// Identifier type used for residency periods.
pub type Id = String;

/// Generates a new unique identifier (UUID v4).
pub fn generate_id() -> Id {
    uuid::Uuid::new_v4().to_string()
}
