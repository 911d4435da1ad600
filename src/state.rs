//! Shared handles used by the scheduler and the services.

use sea_orm::DatabaseConnection;

use crate::{
    service::{
        history::PlaytimeHistoryService, metrics::HitMetricsService, steam_api::SteamApiClient,
        tracking::TrackingService,
    },
    worker::pool::TrackerPool,
};

/// Application state containing shared resources.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `SteamApiClient` wraps a `reqwest::Client`, which uses an `Arc` internally
/// - `TrackerPool` is a handle to the running workers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: DatabaseConnection,

    /// Steam Web API client for id resolution, player summaries and owned games.
    pub steam: SteamApiClient,

    /// Worker pool receiving tracking jobs.
    pub pool: TrackerPool,
}

impl AppState {
    /// Creates a new application state.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `steam` - Steam Web API client
    /// - `pool` - Running tracker pool
    pub fn new(db: DatabaseConnection, steam: SteamApiClient, pool: TrackerPool) -> Self {
        Self { db, steam, pool }
    }

    /// Tracking service borrowing this state.
    pub fn tracking(&self) -> TrackingService<'_> {
        TrackingService::new(&self.db, &self.steam, &self.pool)
    }

    /// Playtime history service borrowing this state.
    pub fn history(&self) -> PlaytimeHistoryService<'_> {
        PlaytimeHistoryService::new(&self.db)
    }

    /// Hit metrics service borrowing this state.
    pub fn metrics(&self) -> HitMetricsService<'_> {
        HitMetricsService::new(&self.db)
    }
}
