//! The boundary between the fixture service and whatever produces schedule
//! rows.
//!
//! [`RawFixtureRow`] mirrors the loosely-typed rows the upstream schedule
//! feed emits: every field optional, scores sometimes numbers and sometimes
//! strings. Normalization into the canonical shape happens in
//! [`crate::normalize`]; this module only defines the wire shape and the
//! [`ScheduleSource`] seam the service fetches through.

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use crate::league::League;

/// A score cell as it appears upstream. Feeds emit `2`, `2.0`, and `"2"`
/// interchangeably, so both shapes deserialize; [`crate::normalize`] decides
/// whether the value is usable.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawNumber {
    Number(f64),
    Text(String),
}

impl std::fmt::Display for RawNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RawNumber::Number(n) => write!(f, "{n}"),
            RawNumber::Text(s) => f.write_str(s),
        }
    }
}

/// One schedule row as the upstream feed serves it.
///
/// Every field defaults to `None` so a sparse or misshapen row still
/// deserializes; missing data is handled per-row during normalization rather
/// than failing the whole schedule.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawFixtureRow {
    #[serde(default)]
    pub home_team: Option<String>,
    #[serde(default)]
    pub away_team: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub home_score: Option<RawNumber>,
    #[serde(default)]
    pub away_score: Option<RawNumber>,
    #[serde(default)]
    pub round: Option<RawNumber>,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default)]
    pub referee: Option<String>,
}

/// Error surfaced by a [`ScheduleSource`] implementation.
///
/// Sources own their failure modes (network, cache, decode); the service
/// only needs something displayable to log and map to a 500, so this wraps
/// whatever the source raises without enumerating it.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct SourceError(Box<dyn std::error::Error + Send + Sync + 'static>);

impl SourceError {
    pub fn new<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
    {
        Self(err.into())
    }
}

/// Anything that can produce the schedule rows for one league season.
///
/// The production implementation fetches from the upstream feed through a
/// disk cache; tests substitute canned rows or forced failures.
#[async_trait]
pub trait ScheduleSource: Send + Sync {
    /// Reads all schedule rows for `league` in `season`.
    ///
    /// `force_cache` asks the source to serve only already-cached data and
    /// skip refreshing from upstream.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] when the rows cannot be produced at all. A
    /// season with no fixtures is `Ok(vec![])`, not an error.
    async fn read_schedule(
        &self,
        league: League,
        season: &str,
        force_cache: bool,
    ) -> Result<Vec<RawFixtureRow>, SourceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_deserializes_from_number_and_text() {
        let row: RawFixtureRow = serde_json::from_str(
            r#"{"home_team":"Arsenal","away_team":"Chelsea","home_score":2,"away_score":"1"}"#,
        )
        .unwrap();
        assert_eq!(row.home_score, Some(RawNumber::Number(2.0)));
        assert_eq!(row.away_score, Some(RawNumber::Text("1".to_owned())));
    }

    #[test]
    fn empty_object_deserializes_to_all_none() {
        let row: RawFixtureRow = serde_json::from_str("{}").unwrap();
        assert_eq!(row, RawFixtureRow::default());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let row: RawFixtureRow = serde_json::from_str(
            r#"{"home_team":"Lyon","attendance":38012,"notes":null}"#,
        )
        .unwrap();
        assert_eq!(row.home_team.as_deref(), Some("Lyon"));
        assert_eq!(row.venue, None);
    }

    #[test]
    fn null_score_is_none_not_text() {
        let row: RawFixtureRow =
            serde_json::from_str(r#"{"home_score":null,"away_score":3.0}"#).unwrap();
        assert_eq!(row.home_score, None);
        assert_eq!(row.away_score, Some(RawNumber::Number(3.0)));
    }
}
