use anyhow::Context;
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};

use footy_core::{display_season, season_for_date, FixtureService, League};
use footy_fbref::{FbrefClient, FbrefSource, ScheduleCache};

#[derive(Debug, Parser)]
#[command(name = "footy-cli")]
#[command(about = "Footy fixtures command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch and print the normalized fixtures for one league as JSON.
    Fixtures {
        /// League code, e.g. premier-league.
        league: String,
        /// Season code such as 2425 (defaults to the current season).
        #[arg(long)]
        season: Option<String>,
        /// Serve cached data when present instead of hitting the feed.
        #[arg(long)]
        force_cache: bool,
    },
    /// List the supported leagues.
    Leagues,
    /// Print the season code for a date (defaults to today).
    Season {
        /// Date in YYYY-MM-DD form.
        #[arg(long)]
        date: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Fixtures {
            league,
            season,
            force_cache,
        } => {
            let rendered = fetch_fixtures(&league, season.as_deref(), force_cache).await?;
            println!("{rendered}");
        }
        Commands::Leagues => {
            for league in League::ALL {
                println!(
                    "{:<16} {}  {} ({})",
                    league.code(),
                    league.icon(),
                    league.name(),
                    league.country()
                );
            }
        }
        Commands::Season { date } => {
            let date = match date {
                Some(raw) => raw
                    .parse::<NaiveDate>()
                    .with_context(|| format!("invalid --date '{raw}', expected YYYY-MM-DD"))?,
                None => Utc::now().naive_utc().date(),
            };
            let code = season_for_date(date);
            println!("{code} ({})", display_season(&code));
        }
    }

    Ok(())
}

async fn fetch_fixtures(
    league: &str,
    season: Option<&str>,
    force_cache: bool,
) -> anyhow::Result<String> {
    let config = footy_core::load_app_config().context("failed to load configuration")?;

    let client = FbrefClient::new(
        &config.fbref_base_url,
        config.fbref_timeout_secs,
        &config.fbref_user_agent,
        config.fbref_max_retries,
        config.fbref_retry_backoff_base_secs,
    )
    .context("failed to build feed client")?;
    let cache = ScheduleCache::new(&config.cache_dir).context("failed to open schedule cache")?;
    let service = FixtureService::new(FbrefSource::new(client, cache));

    let now = Utc::now().naive_utc();
    let batch = service.fixtures(league, season, force_cache, now).await?;

    if batch.skipped > 0 {
        tracing::warn!(
            skipped = batch.skipped,
            "some schedule rows failed to normalize"
        );
    }

    serde_json::to_string_pretty(&batch.fixtures).context("failed to render fixtures as JSON")
}
