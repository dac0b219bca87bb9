//! Integration tests for `FbrefSource::read_schedule`.
//!
//! Uses `wiremock` to stand up a local feed server per test so no real
//! network traffic is made, and a scratch cache directory per test so cache
//! behavior is observable. Covers the happy path, the 404-means-empty rule,
//! error propagation, retries, and both cache modes.

use std::path::{Path, PathBuf};

use serde_json::json;
use wiremock::matchers::{method, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

use footy_core::{League, ScheduleSource};
use footy_fbref::{FbrefClient, FbrefSource, ScheduleCache};

/// Per-test scratch cache directory under the system temp dir.
fn tmp_cache(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("footy-feed-{name}-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

/// Builds an `FbrefSource` against `base_url`: 5-second timeout, no retries.
fn test_source(base_url: &str, cache_dir: &Path) -> FbrefSource {
    let client = FbrefClient::new(base_url, 5, "footy-test/0.1", 0, 0)
        .expect("failed to build test FbrefClient");
    let cache = ScheduleCache::new(cache_dir).expect("failed to open test cache");
    FbrefSource::new(client, cache)
}

/// Same as [`test_source`] but with retries enabled.
fn test_source_with_retries(base_url: &str, cache_dir: &Path, max_retries: u32) -> FbrefSource {
    let client = FbrefClient::new(base_url, 5, "footy-test/0.1", max_retries, 0)
        .expect("failed to build test FbrefClient");
    let cache = ScheduleCache::new(cache_dir).expect("failed to open test cache");
    FbrefSource::new(client, cache)
}

/// Two-row schedule fixture: one played match, one upcoming.
fn schedule_json() -> serde_json::Value {
    json!([
        {
            "home_team": "Arsenal",
            "away_team": "Chelsea",
            "date": "2025-03-01T15:00:00",
            "home_score": 2,
            "away_score": 1,
            "round": 27,
            "venue": "Emirates Stadium",
            "referee": "M. Oliver"
        },
        {
            "home_team": "Liverpool",
            "away_team": "Everton",
            "date": "2025-05-11T14:00:00"
        }
    ])
}

// ---------------------------------------------------------------------------
// Test 1 – happy path: rows parse and come back in order
// ---------------------------------------------------------------------------

#[tokio::test]
async fn read_schedule_returns_parsed_rows() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path_regex(r"^/schedule/ENG.+League/2425$"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&schedule_json()))
        .mount(&server)
        .await;

    let source = test_source(&server.uri(), &tmp_cache("happy"));
    let result = source
        .read_schedule(League::PremierLeague, "2425", false)
        .await;

    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let rows = result.unwrap();
    assert_eq!(rows.len(), 2, "expected both rows");
    assert_eq!(rows[0].home_team.as_deref(), Some("Arsenal"));
    assert_eq!(rows[1].home_score, None, "upcoming match has no score");
}

#[tokio::test]
async fn read_schedule_accepts_an_empty_schedule() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!([])))
        .mount(&server)
        .await;

    let source = test_source(&server.uri(), &tmp_cache("empty"));
    let rows = source
        .read_schedule(League::PremierLeague, "2425", false)
        .await
        .unwrap();

    assert!(rows.is_empty(), "empty array is a valid schedule");
}

// ---------------------------------------------------------------------------
// Test 2 – 404 means an empty schedule, not an error
// ---------------------------------------------------------------------------

#[tokio::test]
async fn read_schedule_maps_not_found_to_empty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let source = test_source(&server.uri(), &tmp_cache("not-found"));
    let result = source.read_schedule(League::SerieA, "2030", false).await;

    assert!(result.is_ok(), "expected Ok for 404, got: {result:?}");
    assert!(
        result.unwrap().is_empty(),
        "expected empty rows for an unpublished season"
    );
}

// ---------------------------------------------------------------------------
// Test 3 – server errors propagate
// ---------------------------------------------------------------------------

#[tokio::test]
async fn read_schedule_propagates_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let source = test_source(&server.uri(), &tmp_cache("server-error"));
    let result = source.read_schedule(League::LaLiga, "2425", false).await;

    assert!(result.is_err(), "expected Err for 503, got: {result:?}");
    let message = result.unwrap_err().to_string();
    assert!(
        message.contains("503"),
        "error should carry the status, got: {message}"
    );
}

#[tokio::test]
async fn read_schedule_propagates_malformed_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("this is not json"))
        .mount(&server)
        .await;

    let source = test_source(&server.uri(), &tmp_cache("bad-body"));
    let result = source.read_schedule(League::Ligue1, "2425", false).await;

    assert!(result.is_err(), "expected Err for junk body, got: {result:?}");
}

// ---------------------------------------------------------------------------
// Test 4 – force_cache serves the cached copy without hitting the feed
// ---------------------------------------------------------------------------

#[tokio::test]
async fn force_cache_serves_cached_schedule_without_refetching() {
    let server = MockServer::start().await;

    // The feed expects exactly one request: the warm-up fetch.
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&schedule_json()))
        .expect(1)
        .mount(&server)
        .await;

    let source = test_source(&server.uri(), &tmp_cache("force-cache"));

    let first = source
        .read_schedule(League::PremierLeague, "2425", false)
        .await
        .unwrap();
    let second = source
        .read_schedule(League::PremierLeague, "2425", true)
        .await
        .unwrap();

    assert_eq!(first, second, "cached read should match the fetched rows");
}

// ---------------------------------------------------------------------------
// Test 5 – force_cache on a cold cache falls through to the feed
// ---------------------------------------------------------------------------

#[tokio::test]
async fn force_cache_with_cold_cache_fetches() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&schedule_json()))
        .expect(1)
        .mount(&server)
        .await;

    let source = test_source(&server.uri(), &tmp_cache("cold-cache"));
    let rows = source
        .read_schedule(League::Bundesliga, "2425", true)
        .await
        .unwrap();

    assert_eq!(rows.len(), 2, "cold force_cache read should still fetch");
}

// ---------------------------------------------------------------------------
// Test 6 – retry: 429 then 200 succeeds
// ---------------------------------------------------------------------------

#[tokio::test]
async fn read_schedule_retries_after_429_and_succeeds() {
    let server = MockServer::start().await;

    // First request returns 429 (served once), then fall through to 200.
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "0"))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&schedule_json()))
        .mount(&server)
        .await;

    let source = test_source_with_retries(&server.uri(), &tmp_cache("retry"), 1);
    let result = source
        .read_schedule(League::PremierLeague, "2425", false)
        .await;

    assert!(result.is_ok(), "expected Ok after retry, got: {result:?}");
    assert_eq!(result.unwrap().len(), 2);
}

// ---------------------------------------------------------------------------
// Test 7 – retry exhaustion returns the final error
// ---------------------------------------------------------------------------

#[tokio::test]
async fn read_schedule_fails_after_exhausting_retries() {
    let server = MockServer::start().await;

    // Always 429 with no sleep between attempts; 1 initial + 1 retry.
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "0"))
        .expect(2)
        .mount(&server)
        .await;

    let source = test_source_with_retries(&server.uri(), &tmp_cache("exhausted"), 1);
    let result = source
        .read_schedule(League::PremierLeague, "2425", false)
        .await;

    assert!(
        result.is_err(),
        "expected Err after exhausting retries, got: {result:?}"
    );
    assert!(
        result.unwrap_err().to_string().contains("rate limited"),
        "expected the rate-limit error to surface"
    );
}

// ---------------------------------------------------------------------------
// Test 8 – a fresh fetch refreshes a stale cache entry
// ---------------------------------------------------------------------------

#[tokio::test]
async fn normal_read_overwrites_the_cached_copy() {
    let server = MockServer::start().await;

    // Stale copy: one row. Fresh feed: two rows.
    let stale = json!([{ "home_team": "Arsenal", "away_team": "Chelsea" }]);
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&stale))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&schedule_json()))
        .mount(&server)
        .await;

    let source = test_source(&server.uri(), &tmp_cache("refresh"));

    let stale_rows = source
        .read_schedule(League::PremierLeague, "2425", false)
        .await
        .unwrap();
    assert_eq!(stale_rows.len(), 1);

    // Second normal read fetches again and replaces the cache.
    let fresh_rows = source
        .read_schedule(League::PremierLeague, "2425", false)
        .await
        .unwrap();
    assert_eq!(fresh_rows.len(), 2);

    // The cache now holds the fresh copy.
    let cached = source
        .read_schedule(League::PremierLeague, "2425", true)
        .await
        .unwrap();
    assert_eq!(cached, fresh_rows);
}
