//! The fixture service: league validation, season resolution, fetch,
//! normalize.
//!
//! The service owns no clock and no I/O of its own. The schedule source is
//! injected through [`ScheduleSource`] and `now` arrives as a parameter.

use chrono::NaiveDateTime;
use thiserror::Error;

use crate::fixture::CanonicalFixture;
use crate::league::{League, UnknownLeague};
use crate::normalize::normalize_schedule;
use crate::schedule::{ScheduleSource, SourceError};
use crate::season::{display_season, season_for_date};

/// Failure of a fixtures request.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The caller asked for a league outside the supported set. Detected
    /// before any source call.
    #[error(transparent)]
    UnknownLeague(#[from] UnknownLeague),
    /// The schedule source could not produce rows.
    #[error("schedule source failed: {0}")]
    Source(#[from] SourceError),
}

/// One league season's worth of normalized fixtures.
#[derive(Debug, Clone, PartialEq)]
pub struct FixtureBatch {
    pub league: League,
    /// The 4-character season code the fixtures were fetched for.
    pub season_code: String,
    pub fixtures: Vec<CanonicalFixture>,
    /// Rows dropped during normalization.
    pub skipped: usize,
}

impl FixtureBatch {
    /// The season in display form, as responses present it.
    #[must_use]
    pub fn display_season(&self) -> String {
        display_season(&self.season_code)
    }
}

/// Stateless request pipeline over an injected [`ScheduleSource`].
#[derive(Debug, Clone)]
pub struct FixtureService<S> {
    source: S,
}

impl<S: ScheduleSource> FixtureService<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Fetches and normalizes the fixtures for one league.
    ///
    /// When `season` is `None` the current season is resolved from `now`.
    /// `now` also drives status derivation; handlers pass the wall clock,
    /// tests pass fixed instants.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::UnknownLeague`] for an unsupported league
    /// code, without touching the source, and [`ServiceError::Source`] when
    /// the source itself fails. Row-level normalization failures are not
    /// errors; they surface as [`FixtureBatch::skipped`].
    pub async fn fixtures(
        &self,
        league_code: &str,
        season: Option<&str>,
        force_cache: bool,
        now: NaiveDateTime,
    ) -> Result<FixtureBatch, ServiceError> {
        let league = League::from_code(league_code)?;
        let season_code = season.map_or_else(|| season_for_date(now.date()), ToOwned::to_owned);

        tracing::info!(league = %league, season = %season_code, force_cache, "fetching fixtures");
        let rows = self
            .source
            .read_schedule(league, &season_code, force_cache)
            .await?;

        if rows.is_empty() {
            tracing::warn!(league = %league, season = %season_code, "no fixtures found");
        }

        let normalized = normalize_schedule(&rows, league, &season_code, now);
        tracing::info!(
            league = %league,
            season = %season_code,
            count = normalized.fixtures.len(),
            skipped = normalized.skipped,
            "fixtures normalized"
        );

        Ok(FixtureBatch {
            league,
            season_code,
            fixtures: normalized.fixtures,
            skipped: normalized.skipped,
        })
    }
}

#[cfg(test)]
#[path = "service_test.rs"]
mod tests;
