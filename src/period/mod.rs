//! Calendar-date intervals and the day-counting convention applied to them.
//!
//! An [`Interval`] is a closed range of dates `[start, end]`. How many days it
//! covers depends on the [`DayCount`] convention; the crate applies a single
//! convention end-to-end, [`DayCount::CANONICAL`], unless a caller explicitly
//! asks for another one.

mod day_count;
mod interval;

pub use day_count::DayCount;
pub use interval::Interval;
