//! Calendar-exact age arithmetic.
//!
//! Ages are completed years: a birthday counts once its month/day has been
//! reached in the current year. A 29 February birthday is reached on 1 March
//! in non-leap years, and [`anniversary`] follows the same rule so that
//! `age_on(birth, anniversary(birth, n)) == n` always holds.

use chrono::{Datelike, NaiveDate};

/// Completed years between `birth` and `on`.
///
/// Returns 0 when `on` precedes `birth`.
pub fn age_on(birth: NaiveDate, on: NaiveDate) -> u32 {
    if on < birth {
        return 0;
    }
    let mut years = on.year() - birth.year();

    // Birthday not reached yet this year
    if (on.month(), on.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }

    years.unsigned_abs()
}

/// The date on which someone born on `birth` turns `years` old.
///
/// `None` only if the result is outside the representable date range.
pub fn anniversary(birth: NaiveDate, years: u32) -> Option<NaiveDate> {
    let year = birth.year().checked_add(i32::try_from(years).ok()?)?;
    NaiveDate::from_ymd_opt(year, birth.month(), birth.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
}
