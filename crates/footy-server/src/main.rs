mod api;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use footy_core::FixtureService;
use footy_fbref::{FbrefClient, FbrefSource, ScheduleCache};

use crate::api::{build_app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Arc::new(footy_core::load_app_config()?);
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let client = FbrefClient::new(
        &config.fbref_base_url,
        config.fbref_timeout_secs,
        &config.fbref_user_agent,
        config.fbref_max_retries,
        config.fbref_retry_backoff_base_secs,
    )?;
    let cache = ScheduleCache::new(&config.cache_dir)?;
    let service = Arc::new(FixtureService::new(FbrefSource::new(client, cache)));

    let app = build_app(AppState {
        service,
        config: Arc::clone(&config),
    });

    let today = chrono::Utc::now().naive_utc().date();
    tracing::info!(addr = %config.bind_addr, "starting soccer data API");
    tracing::info!(cache_dir = %config.cache_dir.display(), "schedule cache directory");
    tracing::info!(season = %footy_core::season_for_date(today), "current season");

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
