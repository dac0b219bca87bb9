use axum::{extract::State, Json};
use serde::Serialize;

use footy_core::{season_for_date, ScheduleSource};

use super::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: &'static str,
    service: &'static str,
    version: &'static str,
    cache_dir: String,
    current_season: String,
}

pub async fn health<S: ScheduleSource>(State(state): State<AppState<S>>) -> Json<HealthResponse> {
    let today = chrono::Utc::now().naive_utc().date();
    Json(HealthResponse {
        status: "healthy",
        service: "soccer-data-api",
        version: env!("CARGO_PKG_VERSION"),
        cache_dir: state.config.cache_dir.display().to_string(),
        current_season: season_for_date(today),
    })
}
