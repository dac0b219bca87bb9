use axum::Json;
use serde::Serialize;

use footy_core::{season_for_date, League};

#[derive(Debug, Serialize)]
pub struct LeagueInfo {
    code: &'static str,
    name: &'static str,
    country: &'static str,
    icon: &'static str,
}

#[derive(Debug, Serialize)]
pub struct LeaguesResponse {
    leagues: Vec<LeagueInfo>,
    count: usize,
    current_season: String,
}

pub async fn list_leagues() -> Json<LeaguesResponse> {
    let leagues: Vec<LeagueInfo> = League::ALL
        .iter()
        .map(|league| LeagueInfo {
            code: league.code(),
            name: league.name(),
            country: league.country(),
            icon: league.icon(),
        })
        .collect();

    let today = chrono::Utc::now().naive_utc().date();
    Json(LeaguesResponse {
        count: leagues.len(),
        leagues,
        current_season: season_for_date(today),
    })
}
