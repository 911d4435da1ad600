//! Playtime snapshot repository.
//!
//! Snapshots are append-only: the tracker reads the latest row per (profile, game) and
//! writes a new row for every credited delta. Rows are only deleted when a profile opts
//! out of tracking.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::{
    error::AppError,
    model::playtime::{CreateSnapshotParam, PlaytimeSnapshot},
};

/// Repository providing database operations for playtime snapshots.
pub struct PlayingTrackerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlayingTrackerRepository<'a, C> {
    /// Creates a new PlayingTrackerRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to a database connection or transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds the most recent snapshot for a profile and game.
    ///
    /// Ordered by recording time, then by row id so two snapshots written within the
    /// same timestamp resolution still have a defined latest one.
    ///
    /// # Arguments
    /// - `steam_id` - Steam64 id of the profile
    /// - `app_id` - Steam app id of the game
    ///
    /// # Returns
    /// - `Ok(Some(PlaytimeSnapshot))` - Latest snapshot
    /// - `Ok(None)` - The game has never been recorded for this profile
    /// - `Err(AppError)` - Database error or corrupt stored app id
    pub async fn find_latest(
        &self,
        steam_id: &str,
        app_id: u64,
    ) -> Result<Option<PlaytimeSnapshot>, AppError> {
        let entity = entity::prelude::PlayingTracker::find()
            .filter(entity::playing_tracker::Column::Steam64id.eq(steam_id))
            .filter(entity::playing_tracker::Column::Game.eq(app_id.to_string()))
            .order_by_desc(entity::playing_tracker::Column::Datetime)
            .order_by_desc(entity::playing_tracker::Column::Id)
            .one(self.db)
            .await?;

        entity.map(PlaytimeSnapshot::from_entity).transpose()
    }

    /// Writes a new snapshot stamped with the current time.
    ///
    /// # Returns
    /// - `Ok(PlaytimeSnapshot)` - The inserted snapshot
    /// - `Err(AppError)` - Database error during insert
    pub async fn create(&self, param: CreateSnapshotParam) -> Result<PlaytimeSnapshot, AppError> {
        let entity = entity::playing_tracker::ActiveModel {
            steam64id: ActiveValue::Set(param.steam_id),
            game: ActiveValue::Set(param.app_id.to_string()),
            gamename: ActiveValue::Set(param.game_name),
            datetime: ActiveValue::Set(Utc::now()),
            delta_playing_time: ActiveValue::Set(param.delta_minutes),
            total_playing_time: ActiveValue::Set(param.total_minutes),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        PlaytimeSnapshot::from_entity(entity)
    }

    /// Gets every snapshot of a profile in recording order.
    ///
    /// # Returns
    /// - `Ok(Vec<PlaytimeSnapshot>)` - Snapshots, oldest first
    /// - `Err(AppError)` - Database error or corrupt stored app id
    pub async fn get_by_steam_id(&self, steam_id: &str) -> Result<Vec<PlaytimeSnapshot>, AppError> {
        entity::prelude::PlayingTracker::find()
            .filter(entity::playing_tracker::Column::Steam64id.eq(steam_id))
            .order_by_asc(entity::playing_tracker::Column::Datetime)
            .order_by_asc(entity::playing_tracker::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(PlaytimeSnapshot::from_entity)
            .collect()
    }

    /// Deletes every snapshot of a profile.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of deleted rows
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_by_steam_id(&self, steam_id: &str) -> Result<u64, DbErr> {
        let result = entity::prelude::PlayingTracker::delete_many()
            .filter(entity::playing_tracker::Column::Steam64id.eq(steam_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
