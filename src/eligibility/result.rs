//! Evaluation outcome types.

use std::fmt;

use super::EligibilityConfig;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A criterion the applicant does not meet.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "reason", rename_all = "snake_case"))]
pub enum IneligibilityReason {
    /// Younger than the minimum age at the reference date
    Age { age_years: u32, minimum_age: u32 },
    /// Neither a citizen nor a legal resident
    Status,
    /// Not enough residency days after the adult age
    Residency { eligible_days: i64, required_days: i64 },
}

impl fmt::Display for IneligibilityReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IneligibilityReason::Age {
                age_years,
                minimum_age,
            } => write!(
                f,
                "Applicant is {} years old but must be {} or older",
                age_years, minimum_age
            ),
            IneligibilityReason::Status => {
                write!(f, "Applicant must be a citizen or legal resident")
            }
            IneligibilityReason::Residency {
                eligible_days,
                required_days,
            } => write!(
                f,
                "Applicant has {} days of eligible residency but needs {} (approximately {:.1} more years)",
                eligible_days,
                required_days,
                EligibilityConfig::days_to_years(required_days - eligible_days)
            ),
        }
    }
}

/// Which pension, if any, the residency supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PensionTier {
    /// Eligible with at least the full-pension residency.
    Full,
    /// Eligible, pension prorated by `pension_fraction`.
    Partial,
    /// At least one criterion unmet; no pension.
    NotEligible,
}

/// Complete outcome of an eligibility evaluation.
///
/// Always fully populated, including when the applicant is not eligible.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EligibilityResult {
    pub age_years: u32,
    /// Every recorded residency day, before age clipping.
    pub total_days: i64,
    pub eligible_days_after_18: i64,
    pub meets_age: bool,
    pub meets_status: bool,
    pub meets_residency: bool,
    pub is_eligible: bool,
    /// `eligible_days_after_18 / full_pension_days`, capped at 1.0.
    pub pension_fraction: f64,
    pub pension_tier: PensionTier,
    /// One entry per failed criterion; empty iff `is_eligible`.
    pub reasons: Vec<IneligibilityReason>,
}

impl EligibilityResult {
    /// Eligible residency expressed in years of 365.25 days.
    pub fn equivalent_years(&self) -> f64 {
        EligibilityConfig::days_to_years(self.eligible_days_after_18)
    }

    /// Years of residency still missing to qualify; 0 when residency is met.
    pub fn years_short(&self) -> f64 {
        self.reasons
            .iter()
            .find_map(|reason| match reason {
                IneligibilityReason::Residency {
                    eligible_days,
                    required_days,
                } => Some(EligibilityConfig::days_to_years(required_days - eligible_days)),
                _ => None,
            })
            .unwrap_or(0.0)
    }

    /// `pension_fraction` as a percentage.
    pub fn pension_percentage(&self) -> f64 {
        self.pension_fraction * 100.0
    }
}
