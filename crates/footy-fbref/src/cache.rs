//! On-disk cache of raw schedule feed responses.
//!
//! One JSON file per league season under `{cache_dir}/schedule/`. The cache
//! stores response bodies verbatim and parses them on the way out with the
//! same deserializer the client uses. Unreadable or corrupt entries are
//! logged and treated as misses; the next successful fetch overwrites them.

use std::path::{Path, PathBuf};

use footy_core::{League, RawFixtureRow};

use crate::error::FbrefError;

pub struct ScheduleCache {
    dir: PathBuf,
}

impl ScheduleCache {
    /// Opens the cache, creating `{cache_dir}/schedule/` if needed.
    ///
    /// # Errors
    ///
    /// Returns [`FbrefError::CacheDir`] when the directory cannot be
    /// created.
    pub fn new(cache_dir: &Path) -> Result<Self, FbrefError> {
        let dir = cache_dir.join("schedule");
        std::fs::create_dir_all(&dir).map_err(|source| FbrefError::CacheDir {
            path: dir.display().to_string(),
            source,
        })?;
        Ok(Self { dir })
    }

    /// Reads the cached rows for one league season, or `None` on any kind
    /// of miss (absent, unreadable, corrupt).
    pub fn load(&self, league: League, season: &str) -> Option<Vec<RawFixtureRow>> {
        let path = self.entry_path(league, season);
        let body = match std::fs::read_to_string(&path) {
            Ok(body) => body,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "cannot read cached schedule");
                return None;
            }
        };
        match serde_json::from_str(&body) {
            Ok(rows) => Some(rows),
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "cached schedule is corrupt, treating as a miss"
                );
                None
            }
        }
    }

    /// Writes one league season's raw response body. Failures are logged
    /// and swallowed; the fetch that produced `body` already succeeded.
    pub fn store(&self, league: League, season: &str, body: &str) {
        let path = self.entry_path(league, season);
        if let Err(e) = std::fs::write(&path, body) {
            tracing::warn!(path = %path.display(), error = %e, "cannot write schedule cache entry");
        }
    }

    /// `{dir}/{league}_{season}.json`. Season codes arrive from the query
    /// string, so anything not filename-safe is dropped before joining.
    fn entry_path(&self, league: League, season: &str) -> PathBuf {
        let season: String = season
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .collect();
        self.dir.join(format!("{}_{season}.json", league.code()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Per-test scratch directory under the system temp dir.
    fn tmp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("footy-cache-{name}-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn load_returns_none_when_absent() {
        let cache = ScheduleCache::new(&tmp_dir("absent")).unwrap();
        assert!(cache.load(League::PremierLeague, "2425").is_none());
    }

    #[test]
    fn store_then_load_round_trips() {
        let cache = ScheduleCache::new(&tmp_dir("round-trip")).unwrap();
        let body = r#"[{"home_team":"Arsenal","away_team":"Chelsea","date":"2025-03-01"}]"#;

        cache.store(League::PremierLeague, "2425", body);
        let rows = cache.load(League::PremierLeague, "2425").unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].home_team.as_deref(), Some("Arsenal"));
    }

    #[test]
    fn corrupt_entry_is_a_miss() {
        let cache = ScheduleCache::new(&tmp_dir("corrupt")).unwrap();
        cache.store(League::SerieA, "2425", "{not json");
        assert!(cache.load(League::SerieA, "2425").is_none());
    }

    #[test]
    fn entries_are_keyed_per_league_and_season() {
        let cache = ScheduleCache::new(&tmp_dir("keys")).unwrap();
        cache.store(League::LaLiga, "2425", "[]");

        assert!(cache.load(League::LaLiga, "2425").is_some());
        assert!(cache.load(League::LaLiga, "2324").is_none());
        assert!(cache.load(League::Bundesliga, "2425").is_none());
    }

    #[test]
    fn hostile_season_cannot_escape_the_cache_dir() {
        let root = tmp_dir("hostile");
        let cache = ScheduleCache::new(&root).unwrap();
        cache.store(League::Ligue1, "../../escape", "[]");

        // The write lands inside the cache dir under a sanitized name.
        assert!(root.join("schedule").join("ligue-1_escape.json").exists());
        assert!(!root.join("escape.json").exists());
    }
}
