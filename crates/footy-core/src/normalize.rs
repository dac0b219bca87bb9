//! Normalization from raw schedule rows to [`CanonicalFixture`].
//!
//! Rows convert independently: one bad row is skipped and logged, the rest
//! of the batch still produces output. Status rules live in
//! [`crate::status`]; this module focuses on field conversion and the
//! derived match identifier.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use thiserror::Error;

use crate::fixture::CanonicalFixture;
use crate::league::League;
use crate::schedule::{RawFixtureRow, RawNumber};
use crate::season::display_season;
use crate::status::derive_status;

/// Why one row failed to normalize.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    #[error("unparseable date '{value}'")]
    Date { value: String },
    #[error("unparseable {side} score '{value}'")]
    Score { side: &'static str, value: String },
    #[error("unparseable round '{value}'")]
    Round { value: String },
}

/// Outcome of normalizing one schedule.
///
/// `skipped` counts rows dropped by per-row failures; response counts
/// reflect survivors only.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedSchedule {
    pub fixtures: Vec<CanonicalFixture>,
    pub skipped: usize,
}

/// Normalizes every row of a schedule, skipping rows that fail.
///
/// Each skipped row is logged with its index and cause; the batch never
/// aborts on a row-level failure.
#[must_use]
pub fn normalize_schedule(
    rows: &[RawFixtureRow],
    league: League,
    season: &str,
    now: NaiveDateTime,
) -> NormalizedSchedule {
    let mut fixtures = Vec::with_capacity(rows.len());
    let mut skipped = 0;

    for (index, row) in rows.iter().enumerate() {
        match normalize_row(row, league, season, now) {
            Ok(fixture) => fixtures.push(fixture),
            Err(error) => {
                skipped += 1;
                tracing::error!(
                    league = %league,
                    season,
                    row = index,
                    error = %error,
                    "skipping fixture row that failed to normalize"
                );
            }
        }
    }

    NormalizedSchedule { fixtures, skipped }
}

/// Normalizes a single raw row into a [`CanonicalFixture`].
///
/// `now` drives status derivation; callers pass the clock in.
///
/// # Errors
///
/// Returns [`NormalizeError`] when a present field cannot be interpreted: a
/// date that parses with no known format, or a score/round that is not
/// numeric. Absent fields are never errors.
pub fn normalize_row(
    row: &RawFixtureRow,
    league: League,
    season: &str,
    now: NaiveDateTime,
) -> Result<CanonicalFixture, NormalizeError> {
    let home_team = row.home_team.clone().unwrap_or_default();
    let away_team = row.away_team.clone().unwrap_or_default();

    let kickoff = match &row.date {
        Some(raw) => Some(parse_kickoff(raw).ok_or_else(|| NormalizeError::Date {
            value: raw.clone(),
        })?),
        None => None,
    };

    let home_score = parse_score(row.home_score.as_ref(), "home")?;
    let away_score = parse_score(row.away_score.as_ref(), "away")?;
    // A match is never partially scored: one missing side blanks both.
    let scores = home_score.zip(away_score);

    let round = match &row.round {
        Some(raw) => Some(to_int(raw).ok_or_else(|| NormalizeError::Round {
            value: raw.to_string(),
        })?),
        None => None,
    };

    let status = derive_status(scores, kickoff, now);
    let id = match_id(league, season, &home_team, &away_team, kickoff.map(|dt| dt.date()));

    Ok(CanonicalFixture {
        api_match_id: id.clone(),
        id,
        competition: league.code().to_owned(),
        season: display_season(season),
        round,
        date: kickoff,
        home_team,
        away_team,
        home_score: scores.map(|(home, _)| home),
        away_score: scores.map(|(_, away)| away),
        status,
        venue: row.venue.clone(),
        referee: row.referee.clone(),
    })
}

/// Builds the deterministic match identifier:
/// `{league}_{season}_{home}_{away}_{YYYYMMDD or "unknown"}`, lowercased,
/// spaces replaced with underscores.
///
/// The same row always yields the same id; the consumer upserts on it. Two
/// fixtures between the same teams on the same day in one league season
/// would collide, which a round-robin schedule cannot produce.
fn match_id(
    league: League,
    season: &str,
    home_team: &str,
    away_team: &str,
    day: Option<NaiveDate>,
) -> String {
    let day = day.map_or_else(|| "unknown".to_owned(), |d| d.format("%Y%m%d").to_string());
    format!("{}_{season}_{home_team}_{away_team}_{day}", league.code())
        .replace(' ', "_")
        .to_lowercase()
}

fn parse_score(
    raw: Option<&RawNumber>,
    side: &'static str,
) -> Result<Option<i32>, NormalizeError> {
    match raw {
        Some(value) => to_int(value).map(Some).ok_or_else(|| NormalizeError::Score {
            side,
            value: value.to_string(),
        }),
        None => Ok(None),
    }
}

/// Interprets a raw cell as an integer, truncating toward zero.
///
/// Text cells must themselves be numeric (`"2"`, `"2.0"`); anything
/// non-finite or outside `i32` range is rejected.
fn to_int(value: &RawNumber) -> Option<i32> {
    let n = match value {
        RawNumber::Number(n) => *n,
        RawNumber::Text(s) => s.trim().parse::<f64>().ok()?,
    };
    if !n.is_finite() {
        return None;
    }
    let truncated = n.trunc();
    if truncated < f64::from(i32::MIN) || truncated > f64::from(i32::MAX) {
        return None;
    }
    #[allow(clippy::cast_possible_truncation)]
    Some(truncated as i32)
}

/// Parses the feed's date column, which is not consistent across seasons:
/// RFC 3339 with offset, naive date-times with `T` or space separators, with
/// or without seconds, and bare dates all occur. Offsets are converted to
/// UTC; bare dates become midnight.
fn parse_kickoff(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(with_offset) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Some(with_offset.naive_utc());
    }

    const FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ];
    for format in FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(parsed);
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN))
}
