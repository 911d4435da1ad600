//! Game-diff recorder: turns Steam's lifetime playtime into per-run deltas.
//!
//! Each run compares the current lifetime minutes of every owned game with the latest
//! stored snapshot and writes a new snapshot only when playtime grew.

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};
use tracing::{debug, info};

use crate::{
    data::playing_tracker::PlayingTrackerRepository,
    error::AppError,
    model::{
        playtime::{CreateSnapshotParam, PlaytimeSnapshot},
        steam::OwnedGame,
    },
    service::steam_api::SteamApiClient,
    worker::{JobRunner, TrackingJob},
};

/// Minutes to credit for a game, or `None` when no snapshot should be written.
///
/// # Arguments
/// - `previous` - Lifetime minutes of the latest snapshot, if any
/// - `current` - Lifetime minutes reported by Steam now
/// - `init` - First run after tracking was enabled
///
/// # Returns
/// - `None` - Playtime did not grow since the previous snapshot
/// - `Some(0)` - Baseline snapshot on an initializing run
/// - `Some(delta)` - Minutes played since the previous snapshot, or lifetime minutes
///   for a game without one (zero for a game never played)
pub fn playtime_delta(previous: Option<i64>, current: i64, init: bool) -> Option<i64> {
    match previous {
        Some(previous) if previous >= current => None,
        _ if init => Some(0),
        Some(previous) => Some(current - previous),
        None => Some(current),
    }
}

/// Writes snapshots for one profile on a connection or transaction.
pub struct PlaytimeRecorder<'a, C: ConnectionTrait> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> PlaytimeRecorder<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    /// Records one game if its playtime changed.
    ///
    /// # Arguments
    /// - `steam_id` - Canonical Steam64 id of the profile
    /// - `game` - Owned game as reported by Steam
    /// - `init` - Write a zero-delta baseline instead of crediting playtime
    ///
    /// # Returns
    /// - `Ok(Some(PlaytimeSnapshot))` - Snapshot written
    /// - `Ok(None)` - Nothing changed, nothing written
    /// - `Err(AppError)` - Database error
    pub async fn record_game(
        &self,
        steam_id: &str,
        game: &OwnedGame,
        init: bool,
    ) -> Result<Option<PlaytimeSnapshot>, AppError> {
        let repo = PlayingTrackerRepository::new(self.conn);

        let previous = repo.find_latest(steam_id, game.appid).await?;
        let Some(delta) = playtime_delta(
            previous.map(|snapshot| snapshot.total_minutes),
            game.playtime_forever,
            init,
        ) else {
            return Ok(None);
        };

        debug!(
            steam_id,
            app_id = game.appid,
            delta,
            total = game.playtime_forever,
            "Recording playtime snapshot"
        );

        let snapshot = repo
            .create(CreateSnapshotParam {
                steam_id: steam_id.to_string(),
                app_id: game.appid,
                game_name: game.name.clone(),
                delta_minutes: delta,
                total_minutes: game.playtime_forever,
            })
            .await?;

        Ok(Some(snapshot))
    }

    /// Records every game in order, stopping at the first error.
    ///
    /// # Returns
    /// - `Ok(Vec<PlaytimeSnapshot>)` - Snapshots written (empty when nothing changed)
    /// - `Err(AppError)` - Database error
    pub async fn record_games(
        &self,
        steam_id: &str,
        games: &[OwnedGame],
        init: bool,
    ) -> Result<Vec<PlaytimeSnapshot>, AppError> {
        let mut written = Vec::new();
        for game in games {
            if let Some(snapshot) = self.record_game(steam_id, game, init).await? {
                written.push(snapshot);
            }
        }

        Ok(written)
    }
}

/// Job body run by the tracker pool.
///
/// Fetches the owned games before touching the database, so an API failure writes
/// nothing. All snapshots of one job are committed together.
pub struct PlaytimeTracker {
    db: DatabaseConnection,
    steam: SteamApiClient,
}

impl PlaytimeTracker {
    pub fn new(db: DatabaseConnection, steam: SteamApiClient) -> Self {
        Self { db, steam }
    }

    /// Records the playtime of one profile.
    ///
    /// # Arguments
    /// - `job` - Profile to record and whether this is the baseline run
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of snapshots written
    /// - `Err(AppError)` - API or database failure; the transaction is rolled back
    pub async fn track(&self, job: &TrackingJob) -> Result<usize, AppError> {
        let games = self.steam.get_owned_games(&job.steam_id).await?;

        let txn = self.db.begin().await?;
        let written = PlaytimeRecorder::new(&txn)
            .record_games(&job.steam_id, &games, job.init)
            .await?;
        txn.commit().await?;

        info!(
            steam_id = %job.steam_id,
            init = job.init,
            games = games.len(),
            written = written.len(),
            "Recorded playtime"
        );

        Ok(written.len())
    }
}

#[async_trait::async_trait]
impl JobRunner for PlaytimeTracker {
    async fn run(&self, job: TrackingJob) -> Result<(), AppError> {
        self.track(&job).await.map(|_| ())
    }
}
