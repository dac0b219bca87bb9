use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Process-wide configuration, read once at startup from `FOOTY_*`
/// environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Directory the schedule feed client caches raw responses under.
    pub cache_dir: PathBuf,
    /// Origins allowed to call `/api/*` from a browser.
    pub frontend_origin: String,
    pub backend_origin: String,
    /// Base URL of the FBref schedule feed, e.g. `https://feed.internal:8090`.
    pub fbref_base_url: String,
    pub fbref_timeout_secs: u64,
    pub fbref_user_agent: String,
    pub fbref_max_retries: u32,
    pub fbref_retry_backoff_base_secs: u64,
}
