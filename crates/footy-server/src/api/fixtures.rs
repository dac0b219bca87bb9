use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use footy_core::{CanonicalFixture, ScheduleSource};

use super::{map_service_error, ApiError, AppState};

#[derive(Debug, Deserialize)]
pub struct FixturesQuery {
    season: Option<String>,
    force_cache: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct FixturesResponse {
    matches: Vec<CanonicalFixture>,
    count: usize,
    league: String,
    /// Season in display form, matching the `season` inside each match.
    season: String,
}

pub async fn get_fixtures<S: ScheduleSource>(
    State(state): State<AppState<S>>,
    Path(league_code): Path<String>,
    Query(query): Query<FixturesQuery>,
) -> Result<Json<FixturesResponse>, ApiError> {
    // Accepts true/True/TRUE; anything else (or absence) means false.
    let force_cache = query
        .force_cache
        .as_deref()
        .is_some_and(|value| value.eq_ignore_ascii_case("true"));
    let now = chrono::Utc::now().naive_utc();

    let batch = state
        .service
        .fixtures(&league_code, query.season.as_deref(), force_cache, now)
        .await
        .map_err(map_service_error)?;

    Ok(Json(FixturesResponse {
        count: batch.fixtures.len(),
        league: batch.league.code().to_owned(),
        season: batch.display_season(),
        matches: batch.fixtures,
    }))
}
