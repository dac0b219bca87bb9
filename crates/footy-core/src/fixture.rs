//! The canonical fixture shape the API serves.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::status::MatchStatus;

/// A fully normalized fixture, ready to serialize into API responses.
///
/// Field names follow the downstream consumer's camelCase contract. Optional
/// fields serialize as explicit `null` rather than being omitted: consumers
/// key on field presence being stable across rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalFixture {
    /// Stable identifier derived from league, season, teams, and date.
    pub id: String,
    /// Same value as `id`; the downstream store upserts on this key.
    pub api_match_id: String,
    /// URL code of the competition (`"premier-league"`).
    pub competition: String,
    /// Season in display form (`"2024-2025"`); the id embeds the raw code.
    pub season: String,
    pub round: Option<i32>,
    /// Kickoff in naive UTC, when the feed provided a parseable date.
    pub date: Option<NaiveDateTime>,
    pub home_team: String,
    pub away_team: String,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    pub status: MatchStatus,
    pub venue: Option<String>,
    pub referee: Option<String>,
}
