//! Pension eligibility evaluation.
//!
//! [`evaluate`] is a pure function of an [`EligibilityInput`] and an
//! [`IntervalSet`](crate::residency::IntervalSet) snapshot. Falling short of
//! a criterion is not an error: the returned [`EligibilityResult`] carries an
//! [`IneligibilityReason`] for each failed criterion.
//!
//! | Criterion | Rule (defaults)                                   |
//! |-----------|---------------------------------------------------|
//! | Age       | completed years at the reference date `>= 65`     |
//! | Status    | citizen or legal resident                         |
//! | Residency | days on or after the 18th birthday `>= 3650`      |

mod age;
mod config;
mod evaluator;
mod input;
mod result;


pub use age::{age_on, anniversary};
pub use config::{ConfigError, EligibilityConfig};
pub use evaluator::{eligible_days_after, eligible_days_after_18, evaluate, evaluate_with};
pub use input::{CitizenshipStatus, EligibilityInput};
pub use result::{EligibilityResult, IneligibilityReason, PensionTier};
