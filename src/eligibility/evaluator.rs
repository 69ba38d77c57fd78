use chrono::NaiveDate;
use tracing::{debug, warn};

use super::age::{age_on, anniversary};
use super::{
    EligibilityConfig, EligibilityInput, EligibilityResult, IneligibilityReason, PensionTier,
};
use crate::period::DayCount;
use crate::residency::IntervalSet;

/// Residency days on or after `cutoff`.
///
/// Each period is clipped to start no earlier than `cutoff`; periods ending
/// before it contribute nothing. Periods are disjoint, so the sum does not
/// depend on their order.
pub fn eligible_days_after(set: &IntervalSet, cutoff: NaiveDate, day_count: DayCount) -> i64 {
    set.intervals()
        .filter_map(|interval| interval.clip_start(cutoff))
        .map(|interval| interval.days(day_count))
        .sum()
}

/// Residency days on or after the 18th birthday, under the canonical
/// day-count convention.
pub fn eligible_days_after_18(set: &IntervalSet, birth_date: NaiveDate) -> i64 {
    eligible_days_after(set, adulthood(birth_date, 18), DayCount::CANONICAL)
}

/// Evaluates eligibility with the default [`EligibilityConfig`].
pub fn evaluate(input: &EligibilityInput, set: &IntervalSet) -> EligibilityResult {
    evaluate_with(input, set, &EligibilityConfig::default())
}

/// Evaluates eligibility of `input` given the residency in `set`.
///
/// Never fails: every unmet criterion is reported in
/// [`EligibilityResult::reasons`]. A config that fails
/// [`EligibilityConfig::validate`] is logged; a non-positive threshold is
/// never met.
pub fn evaluate_with(
    input: &EligibilityInput,
    set: &IntervalSet,
    config: &EligibilityConfig,
) -> EligibilityResult {
    if let Err(error) = config.validate() {
        warn!(%error, "evaluating eligibility with an invalid config");
    }

    let age_years = age_on(input.birth_date, input.reference_date);
    let total_days = set.total_days(config.day_count);
    let eligible_days = eligible_days_after(
        set,
        adulthood(input.birth_date, config.adult_age),
        config.day_count,
    );

    let meets_age = age_years >= config.minimum_age;
    let meets_status = input.citizenship.qualifies();
    let meets_residency =
        config.minimum_residency_days > 0 && eligible_days >= config.minimum_residency_days;
    let is_eligible = meets_age && meets_status && meets_residency;

    let mut reasons = Vec::new();
    if !meets_age {
        reasons.push(IneligibilityReason::Age {
            age_years,
            minimum_age: config.minimum_age,
        });
    }
    if !meets_status {
        reasons.push(IneligibilityReason::Status);
    }
    if !meets_residency {
        reasons.push(IneligibilityReason::Residency {
            eligible_days,
            required_days: config.minimum_residency_days,
        });
    }

    let pension_fraction = if config.full_pension_days > 0 {
        (eligible_days as f64 / config.full_pension_days as f64).min(1.0)
    } else {
        0.0
    };

    let pension_tier = if !is_eligible {
        PensionTier::NotEligible
    } else if config.full_pension_days > 0 && eligible_days >= config.full_pension_days {
        PensionTier::Full
    } else {
        PensionTier::Partial
    };

    debug!(
        age_years,
        total_days,
        eligible_days,
        is_eligible,
        pension_fraction,
        "evaluated pension eligibility"
    );

    EligibilityResult {
        age_years,
        total_days,
        eligible_days_after_18: eligible_days,
        meets_age,
        meets_status,
        meets_residency,
        is_eligible,
        pension_fraction,
        pension_tier,
        reasons,
    }
}

/// First day on which residency counts. Beyond the representable range
/// nothing counts.
fn adulthood(birth_date: NaiveDate, adult_age: u32) -> NaiveDate {
    anniversary(birth_date, adult_age).unwrap_or(NaiveDate::MAX)
}
