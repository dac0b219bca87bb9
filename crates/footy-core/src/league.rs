//! The fixed set of supported leagues and their metadata.
//!
//! The API surface only serves these five competitions. Each variant owns
//! its URL code (what clients send), its upstream feed name, and the display
//! metadata the `/leagues` listing returns.

use serde::Serialize;
use thiserror::Error;

/// A league code that is not one of the supported five.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("League '{code}' not supported")]
pub struct UnknownLeague {
    pub code: String,
}

/// One of the five supported top-flight competitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "&'static str")]
pub enum League {
    PremierLeague,
    LaLiga,
    SerieA,
    Bundesliga,
    Ligue1,
}

impl League {
    /// Every supported league, in listing order.
    pub const ALL: [League; 5] = [
        League::PremierLeague,
        League::LaLiga,
        League::SerieA,
        League::Bundesliga,
        League::Ligue1,
    ];

    /// Resolves a URL league code (`"premier-league"`) to its league.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownLeague`] when `code` is not one of the supported
    /// codes. Matching is exact: no case folding, no aliases.
    pub fn from_code(code: &str) -> Result<Self, UnknownLeague> {
        match code {
            "premier-league" => Ok(League::PremierLeague),
            "la-liga" => Ok(League::LaLiga),
            "serie-a" => Ok(League::SerieA),
            "bundesliga" => Ok(League::Bundesliga),
            "ligue-1" => Ok(League::Ligue1),
            _ => Err(UnknownLeague {
                code: code.to_owned(),
            }),
        }
    }

    /// The URL code clients use in paths and query strings.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            League::PremierLeague => "premier-league",
            League::LaLiga => "la-liga",
            League::SerieA => "serie-a",
            League::Bundesliga => "bundesliga",
            League::Ligue1 => "ligue-1",
        }
    }

    /// The competition identifier the upstream schedule feed expects.
    #[must_use]
    pub fn fbref_name(self) -> &'static str {
        match self {
            League::PremierLeague => "ENG-Premier League",
            League::LaLiga => "ESP-La Liga",
            League::SerieA => "ITA-Serie A",
            League::Bundesliga => "GER-Bundesliga",
            League::Ligue1 => "FRA-Ligue 1",
        }
    }

    /// Human-readable competition name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            League::PremierLeague => "Premier League",
            League::LaLiga => "La Liga",
            League::SerieA => "Serie A",
            League::Bundesliga => "Bundesliga",
            League::Ligue1 => "Ligue 1",
        }
    }

    /// Country the competition is played in.
    #[must_use]
    pub fn country(self) -> &'static str {
        match self {
            League::PremierLeague => "England",
            League::LaLiga => "Spain",
            League::SerieA => "Italy",
            League::Bundesliga => "Germany",
            League::Ligue1 => "France",
        }
    }

    /// Flag emoji shown next to the league in listings.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            League::PremierLeague => "\u{1f3f4}\u{e0067}\u{e0062}\u{e0065}\u{e006e}\u{e0067}\u{e007f}",
            League::LaLiga => "\u{1f1ea}\u{1f1f8}",
            League::SerieA => "\u{1f1ee}\u{1f1f9}",
            League::Bundesliga => "\u{1f1e9}\u{1f1ea}",
            League::Ligue1 => "\u{1f1eb}\u{1f1f7}",
        }
    }
}

impl From<League> for &'static str {
    fn from(league: League) -> Self {
        league.code()
    }
}

impl std::fmt::Display for League {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
