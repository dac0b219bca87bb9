//! HTTP client for the FBref schedule feed.
//!
//! The feed serves one JSON array of schedule rows per league season at
//! `GET {base}/schedule/{league}/{season}`, where the league path segment is
//! the feed's own competition name (`ENG-Premier League`).

use std::time::Duration;

use footy_core::{League, RawFixtureRow};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::Client;

use crate::error::FbrefError;
use crate::retry::retry_with_backoff;

/// HTTP client for the schedule feed.
///
/// Maps 429 to [`FbrefError::RateLimited`], 404 to
/// [`FbrefError::ScheduleNotFound`], and any other non-2xx status to
/// [`FbrefError::UnexpectedStatus`]. Transient errors (429, network
/// failures) are retried with exponential backoff up to `max_retries`
/// additional attempts.
pub struct FbrefClient {
    client: Client,
    base_url: String,
    max_retries: u32,
    backoff_base_secs: u64,
}

impl FbrefClient {
    /// Creates an `FbrefClient` with configured timeout, `User-Agent`, and
    /// retry policy.
    ///
    /// `max_retries` is the number of additional attempts after the first
    /// failure; `0` disables retries. `backoff_base_secs` sets the base of
    /// the exponential backoff schedule.
    ///
    /// # Errors
    ///
    /// Returns [`FbrefError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
        max_retries: u32,
        backoff_base_secs: u64,
    ) -> Result<Self, FbrefError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
            max_retries,
            backoff_base_secs,
        })
    }

    /// Fetches the schedule rows for one league season, with automatic
    /// retry on transient errors.
    ///
    /// Returns the parsed rows together with the raw response body so
    /// callers can cache the body verbatim.
    ///
    /// # Errors
    ///
    /// - [`FbrefError::ScheduleNotFound`] — HTTP 404 (not retried).
    /// - [`FbrefError::RateLimited`] — HTTP 429 after all retries exhausted.
    /// - [`FbrefError::UnexpectedStatus`] — any other non-2xx status.
    /// - [`FbrefError::Http`] — network failure after all retries exhausted.
    /// - [`FbrefError::Deserialize`] — body is not a JSON row array (not retried).
    /// - [`FbrefError::InvalidBaseUrl`] — the configured base URL does not parse.
    pub async fn fetch_schedule(
        &self,
        league: League,
        season: &str,
    ) -> Result<(Vec<RawFixtureRow>, String), FbrefError> {
        let url = Self::schedule_url(&self.base_url, league, season)?;
        let host = url.host_str().unwrap_or(&self.base_url).to_owned();
        let url = url.to_string();

        retry_with_backoff(self.max_retries, self.backoff_base_secs, || {
            let url = url.clone();
            let host = host.clone();
            async move {
                let response = self
                    .client
                    .get(&url)
                    .header(reqwest::header::ACCEPT, "application/json")
                    .send()
                    .await?;
                let status = response.status();

                if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                    let retry_after_secs = response
                        .headers()
                        .get(reqwest::header::RETRY_AFTER)
                        .and_then(|v| v.to_str().ok())
                        .and_then(|s| s.parse::<u64>().ok())
                        .unwrap_or(60);
                    return Err(FbrefError::RateLimited {
                        host,
                        retry_after_secs,
                    });
                }

                if status == reqwest::StatusCode::NOT_FOUND {
                    return Err(FbrefError::ScheduleNotFound { url });
                }

                if !status.is_success() {
                    return Err(FbrefError::UnexpectedStatus {
                        status: status.as_u16(),
                        url,
                    });
                }

                let body = response.text().await?;
                let rows = serde_json::from_str::<Vec<RawFixtureRow>>(&body).map_err(|e| {
                    FbrefError::Deserialize {
                        context: format!("schedule for {} {season}", league.code()),
                        source: e,
                    }
                })?;

                Ok((rows, body))
            }
        })
        .await
    }

    /// Builds the schedule URL for one league season. Both path segments are
    /// percent-encoded; the feed league names contain spaces and season
    /// codes arrive from the query string.
    ///
    /// # Errors
    ///
    /// Returns [`FbrefError::InvalidBaseUrl`] if `base_url` cannot anchor an
    /// absolute URL.
    fn schedule_url(
        base_url: &str,
        league: League,
        season: &str,
    ) -> Result<reqwest::Url, FbrefError> {
        let league_segment = utf8_percent_encode(league.fbref_name(), NON_ALPHANUMERIC);
        let season_segment = utf8_percent_encode(season, NON_ALPHANUMERIC);
        let raw = format!("{base_url}/schedule/{league_segment}/{season_segment}");
        reqwest::Url::parse(&raw).map_err(|e| FbrefError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })
    }
}
