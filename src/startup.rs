use std::{sync::Arc, time::Duration};

use sea_orm::DatabaseConnection;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::{
    config::{Config, TrackerPoolConfig},
    error::AppError,
    service::{playtime::PlaytimeTracker, steam_api::SteamApiClient},
    worker::{drain::OverflowDrainer, overflow::OverflowBuffer, pool::TrackerPool},
};

/// Installs the global tracing subscriber.
///
/// The filter is read from `RUST_LOG` and defaults to `info`.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the HTTP client used for the Steam Web API.
///
/// Redirects are disabled and every request is bounded by a timeout so a hanging
/// request cannot hold a tracker worker forever.
///
/// # Returns
/// - `Ok(reqwest::Client)` - Configured client
/// - `Err(AppError::SteamApiErr)` - TLS backend could not be initialized
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(Duration::from_secs(10))
        .build()?;

    Ok(client)
}

/// Creates the Steam Web API client from configuration.
pub fn setup_steam_client(config: &Config, http: reqwest::Client) -> SteamApiClient {
    SteamApiClient::new(http, config.steam_api_url.clone(), config.steam_api_key.clone())
}

/// Starts the tracker pool and the overflow drain loop.
///
/// # Arguments
/// - `config` - Pool sizing and drain settings
/// - `db` - Database connection used by the job body
/// - `steam` - Steam Web API client used by the job body
///
/// # Returns
/// - `TrackerPool` - Handle for submitting tracking jobs
pub fn start_tracker(
    config: &TrackerPoolConfig,
    db: DatabaseConnection,
    steam: SteamApiClient,
) -> TrackerPool {
    let overflow = Arc::new(OverflowBuffer::new(config.overflow_capacity));
    let runner = Arc::new(PlaytimeTracker::new(db, steam));
    let pool = TrackerPool::start(config, runner, overflow.clone());

    let drainer = OverflowDrainer::new(overflow, pool.clone(), config.drain_batch_size);
    tokio::spawn(drainer.run(config.drain_interval));

    pool
}
