//! Thresholds used by eligibility evaluation.

use thiserror::Error;

use crate::period::DayCount;

/// Errors reported by [`EligibilityConfig::validate`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Minimum residency must be a positive number of days, got {0}")]
    NonPositiveResidency(i64),

    #[error("Full-pension residency must be a positive number of days, got {0}")]
    NonPositiveFullPension(i64),

    #[error("Full-pension residency ({full}) is below the minimum residency ({minimum})")]
    FullPensionBelowMinimum { full: i64, minimum: i64 },
}

/// Configuration for eligibility evaluation.
///
/// The defaults encode the old-age pension rule the crate estimates:
/// age 65, ten years of residency after age 18, forty years for a full
/// pension, inclusive day counting.
///
/// Deserialized configs are validated; one that fails
/// [`EligibilityConfig::validate`] is rejected.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawEligibilityConfig"))]
pub struct EligibilityConfig {
    /// Completed years required at the reference date.
    pub minimum_age: u32,
    /// Age from which residency days count.
    pub adult_age: u32,
    /// Residency days (after `adult_age`) required to qualify at all.
    pub minimum_residency_days: i64,
    /// Residency days (after `adult_age`) that earn a full pension.
    pub full_pension_days: i64,
    /// Day-count convention applied to every period and gap.
    pub day_count: DayCount,
}

impl EligibilityConfig {
    /// Average calendar year length, used to express day counts as years.
    pub const DAYS_PER_YEAR: f64 = 365.25;

    /// Ten years of 365 days.
    pub const DEFAULT_MINIMUM_RESIDENCY_DAYS: i64 = 3650;

    /// Forty years of 365.25 days. Under inclusive counting this is also the
    /// exact length of forty calendar years containing ten leap days.
    pub const DEFAULT_FULL_PENSION_DAYS: i64 = 14610;

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.minimum_residency_days <= 0 {
            return Err(ConfigError::NonPositiveResidency(
                self.minimum_residency_days,
            ));
        }
        if self.full_pension_days <= 0 {
            return Err(ConfigError::NonPositiveFullPension(self.full_pension_days));
        }
        if self.full_pension_days < self.minimum_residency_days {
            return Err(ConfigError::FullPensionBelowMinimum {
                full: self.full_pension_days,
                minimum: self.minimum_residency_days,
            });
        }
        Ok(())
    }

    /// Converts a day count into (fractional) years.
    pub fn days_to_years(days: i64) -> f64 {
        days as f64 / Self::DAYS_PER_YEAR
    }
}

impl Default for EligibilityConfig {
    fn default() -> Self {
        Self {
            minimum_age: 65,
            adult_age: 18,
            minimum_residency_days: Self::DEFAULT_MINIMUM_RESIDENCY_DAYS,
            full_pension_days: Self::DEFAULT_FULL_PENSION_DAYS,
            day_count: DayCount::CANONICAL,
        }
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(default)]
struct RawEligibilityConfig {
    minimum_age: u32,
    adult_age: u32,
    minimum_residency_days: i64,
    full_pension_days: i64,
    day_count: DayCount,
}

#[cfg(feature = "serde")]
impl Default for RawEligibilityConfig {
    fn default() -> Self {
        let defaults = EligibilityConfig::default();
        Self {
            minimum_age: defaults.minimum_age,
            adult_age: defaults.adult_age,
            minimum_residency_days: defaults.minimum_residency_days,
            full_pension_days: defaults.full_pension_days,
            day_count: defaults.day_count,
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<RawEligibilityConfig> for EligibilityConfig {
    type Error = ConfigError;

    fn try_from(raw: RawEligibilityConfig) -> Result<Self, Self::Error> {
        let config = Self {
            minimum_age: raw.minimum_age,
            adult_age: raw.adult_age,
            minimum_residency_days: raw.minimum_residency_days,
            full_pension_days: raw.full_pension_days,
            day_count: raw.day_count,
        };
        config.validate()?;
        Ok(config)
    }
}
