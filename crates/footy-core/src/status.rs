//! Match status derivation.
//!
//! The upstream feed carries no status column, so status is inferred from
//! what a row does have. The rules apply in priority order and the first
//! match wins:
//!
//! | # | condition                         | status      |
//! |---|-----------------------------------|-------------|
//! | 1 | both scores present               | `finished`  |
//! | 2 | no kickoff date                   | `scheduled` |
//! | 3 | kickoff is today                  | `live`      |
//! | 4 | kickoff is after today            | `scheduled` |
//! | 5 | kickoff passed without a score    | `postponed` |
//!
//! Rule 3 is day-granular: without kickoff-time precision in the feed, any
//! fixture dated today is treated as potentially in progress.

use chrono::NaiveDateTime;
use serde::Serialize;

/// Lifecycle state of a fixture as served by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Scheduled,
    Live,
    Finished,
    Postponed,
}

impl MatchStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            MatchStatus::Scheduled => "scheduled",
            MatchStatus::Live => "live",
            MatchStatus::Finished => "finished",
            MatchStatus::Postponed => "postponed",
        }
    }
}

impl std::fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derives the status for one fixture.
///
/// `scores` is present only when both scores parsed; `kickoff` is the
/// fixture's naive-UTC kickoff, if known. Callers pass `now` in rather than
/// reading the clock here.
#[must_use]
pub fn derive_status(
    scores: Option<(i32, i32)>,
    kickoff: Option<NaiveDateTime>,
    now: NaiveDateTime,
) -> MatchStatus {
    if scores.is_some() {
        return MatchStatus::Finished;
    }
    let Some(kickoff) = kickoff else {
        return MatchStatus::Scheduled;
    };
    if kickoff.date() == now.date() {
        MatchStatus::Live
    } else if kickoff.date() > now.date() {
        MatchStatus::Scheduled
    } else {
        MatchStatus::Postponed
    }
}
