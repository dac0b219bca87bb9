//! Season resolution for August–July competition years.
//!
//! Seasons are identified by a 4-character code made of two 2-digit year
//! fragments: `"2425"` is the 2024–2025 season. The current season is a pure
//! function of the calendar date, never stored; callers pass the clock in.

use chrono::{Datelike, NaiveDate};

/// Returns the season code for the season `date` falls into.
///
/// A season starts in August: from August onward the season spans
/// `year`→`year+1`, before August it spans `year-1`→`year`.
///
/// `2025-01-15` → `"2425"`, `2025-09-01` → `"2526"`.
#[must_use]
pub fn season_for_date(date: NaiveDate) -> String {
    let (start, end) = if date.month() >= 8 {
        (date.year(), date.year() + 1)
    } else {
        (date.year() - 1, date.year())
    };
    format!("{:02}{:02}", start % 100, end % 100)
}

/// Expands a 4-character season code into its display form:
/// `"2425"` → `"2024-2025"`.
///
/// Anything that is not exactly 4 characters is returned unchanged. Callers
/// pass season codes straight from the query string; a malformed code flows
/// through responses as-is rather than failing the request.
#[must_use]
pub fn display_season(code: &str) -> String {
    let chars: Vec<char> = code.chars().collect();
    match chars[..] {
        [a, b, c, d] => format!("20{a}{b}-20{c}{d}"),
        _ => code.to_owned(),
    }
}
