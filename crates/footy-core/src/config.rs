use thiserror::Error;

use crate::app_config::{AppConfig, Environment};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingEnvVar(String),

    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let fbref_base_url = require("FOOTY_FBREF_BASE_URL")?;

    let env = parse_environment(&or_default("FOOTY_ENV", "development"));

    let bind_addr = parse_addr("FOOTY_BIND_ADDR", "0.0.0.0:5001")?;
    let log_level = or_default("FOOTY_LOG_LEVEL", "info");
    let cache_dir = PathBuf::from(or_default("FOOTY_CACHE_DIR", "./cache"));

    let frontend_origin = or_default("FOOTY_FRONTEND_ORIGIN", "http://localhost:5173");
    let backend_origin = or_default("FOOTY_BACKEND_ORIGIN", "http://localhost:5000");

    let fbref_timeout_secs = parse_u64("FOOTY_FBREF_TIMEOUT_SECS", "30")?;
    let fbref_user_agent = or_default("FOOTY_FBREF_USER_AGENT", "footy/0.1 (fixtures api)");
    let fbref_max_retries = parse_u32("FOOTY_FBREF_MAX_RETRIES", "3")?;
    let fbref_retry_backoff_base_secs = parse_u64("FOOTY_FBREF_RETRY_BACKOFF_BASE_SECS", "5")?;

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        cache_dir,
        frontend_origin,
        backend_origin,
        fbref_base_url,
        fbref_timeout_secs,
        fbref_user_agent,
        fbref_max_retries,
        fbref_retry_backoff_base_secs,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}
