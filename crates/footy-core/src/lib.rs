pub mod app_config;
pub mod config;
pub mod fixture;
pub mod league;
pub mod normalize;
pub mod schedule;
pub mod season;
pub mod service;
pub mod status;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env, ConfigError};
pub use fixture::CanonicalFixture;
pub use league::{League, UnknownLeague};
pub use normalize::{normalize_row, normalize_schedule, NormalizeError, NormalizedSchedule};
pub use schedule::{RawFixtureRow, RawNumber, ScheduleSource, SourceError};
pub use season::{display_season, season_for_date};
pub use service::{FixtureBatch, FixtureService, ServiceError};
pub use status::{derive_status, MatchStatus};
