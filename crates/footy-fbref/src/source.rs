//! The production [`ScheduleSource`]: feed client in front of the disk
//! cache.

use async_trait::async_trait;
use footy_core::{League, RawFixtureRow, ScheduleSource, SourceError};

use crate::cache::ScheduleCache;
use crate::client::FbrefClient;
use crate::error::FbrefError;

/// Reads schedules from the FBref feed, caching raw responses on disk.
///
/// `force_cache` serves the cached copy when one exists and only goes to the
/// network on a cold cache. Normal reads always fetch and refresh the cache.
pub struct FbrefSource {
    client: FbrefClient,
    cache: ScheduleCache,
}

impl FbrefSource {
    pub fn new(client: FbrefClient, cache: ScheduleCache) -> Self {
        Self { client, cache }
    }
}

#[async_trait]
impl ScheduleSource for FbrefSource {
    async fn read_schedule(
        &self,
        league: League,
        season: &str,
        force_cache: bool,
    ) -> Result<Vec<RawFixtureRow>, SourceError> {
        if force_cache {
            if let Some(rows) = self.cache.load(league, season) {
                tracing::debug!(league = %league, season, rows = rows.len(), "serving schedule from cache");
                return Ok(rows);
            }
            tracing::debug!(league = %league, season, "cache cold despite force_cache, fetching");
        }

        match self.client.fetch_schedule(league, season).await {
            Ok((rows, body)) => {
                self.cache.store(league, season, &body);
                Ok(rows)
            }
            // An unpublished league season is an empty schedule, not a
            // failure.
            Err(FbrefError::ScheduleNotFound { url }) => {
                tracing::debug!(url, "no schedule upstream, returning empty");
                Ok(Vec::new())
            }
            Err(err) => Err(SourceError::new(err)),
        }
    }
}
