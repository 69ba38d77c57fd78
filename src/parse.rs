//! Text input of residency periods.
//!
//! One period per line, blank lines ignored. Two forms are accepted:
//!
//! | Form                         | Meaning                                   |
//! |------------------------------|-------------------------------------------|
//! | `1980-1990`                  | whole years, `[1980-01-01, 1989-12-31]`   |
//! | `1980-03-15..1990-06-30`     | explicit closed date range                |
//! | `1980-03-15 to 1990-06-30`   | same, alternative separator               |
//!
//! A year range `A-B` records `B - A` whole years: it starts on 1 January of
//! `A` and runs up to, but not including, 1 January of `B`.

use chrono::NaiveDate;
use thiserror::Error;

use crate::period::Interval;
use crate::residency::ResidencyError;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Errors produced while reading periods from text. Lines are 1-based.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("line {line}: expected `YYYY-YYYY` or `YYYY-MM-DD..YYYY-MM-DD`, found `{text}`")]
    Malformed { line: usize, text: String },

    #[error("line {line}: `{text}` is not a valid date")]
    Date { line: usize, text: String },

    #[error("line {line}: {source}")]
    Range {
        line: usize,
        #[source]
        source: ResidencyError,
    },
}

/// Parses every non-blank line of `text` into an [`Interval`].
///
/// Fails on the first line that cannot be read; nothing is skipped silently.
///
/// ```
/// use oas_residency::parse::parse_periods;
///
/// let periods = parse_periods("1980-1990\n\n1992-03-01..2023-12-31\n").unwrap();
/// assert_eq!(periods.len(), 2);
/// assert_eq!(periods[0].to_string(), "[1980-01-01, 1989-12-31]");
/// ```
pub fn parse_periods(text: &str) -> Result<Vec<Interval>, ParseError> {
    text.lines()
        .enumerate()
        .map(|(index, raw)| (index + 1, raw.trim()))
        .filter(|(_, line)| !line.is_empty())
        .map(|(line, content)| parse_line(line, content))
        .collect()
}

fn parse_line(line: usize, text: &str) -> Result<Interval, ParseError> {
    if let Some((start, end)) = text.split_once("..").or_else(|| text.split_once(" to ")) {
        let start = parse_date(line, start.trim())?;
        let end = parse_date(line, end.trim())?;
        return Interval::new(start, end).map_err(|source| ParseError::Range { line, source });
    }

    let malformed = || ParseError::Malformed {
        line,
        text: text.to_string(),
    };
    let (start, end) = text.split_once('-').ok_or_else(malformed)?;
    let start_year: i32 = start.trim().parse().map_err(|_| malformed())?;
    let end_year: i32 = end.trim().parse().map_err(|_| malformed())?;
    year_range(line, text, start_year, end_year)
}

fn parse_date(line: usize, text: &str) -> Result<NaiveDate, ParseError> {
    NaiveDate::parse_from_str(text, DATE_FORMAT).map_err(|_| ParseError::Date {
        line,
        text: text.to_string(),
    })
}

fn year_range(
    line: usize,
    text: &str,
    start_year: i32,
    end_year: i32,
) -> Result<Interval, ParseError> {
    let out_of_range = || ParseError::Date {
        line,
        text: text.to_string(),
    };
    let start = NaiveDate::from_ymd_opt(start_year, 1, 1).ok_or_else(out_of_range)?;
    let end = NaiveDate::from_ymd_opt(end_year, 1, 1)
        .and_then(|d| d.pred_opt())
        .ok_or_else(out_of_range)?;
    Interval::new(start, end).map_err(|source| ParseError::Range { line, source })
}
