//! Playtime snapshot factory for creating test playing tracker entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test playtime snapshots.
///
/// Snapshots are not tied to a profile row by a foreign key, so the factory only needs
/// the Steam id they belong to.
pub struct PlayingTrackerFactory<'a> {
    db: &'a DatabaseConnection,
    steam64id: String,
    game: String,
    gamename: Option<String>,
    datetime: DateTime<Utc>,
    delta: i64,
    total: i64,
}

impl<'a> PlayingTrackerFactory<'a> {
    /// Creates a new PlayingTrackerFactory with default values.
    ///
    /// Defaults:
    /// - game: unique app id
    /// - gamename: `"Game {app id}"`
    /// - datetime: now
    /// - delta / total: `0`
    pub fn new(db: &'a DatabaseConnection, steam64id: impl Into<String>) -> Self {
        let game = next_id().to_string();
        Self {
            db,
            steam64id: steam64id.into(),
            gamename: Some(format!("Game {}", game)),
            game,
            datetime: Utc::now(),
            delta: 0,
            total: 0,
        }
    }

    pub fn game(mut self, game: impl Into<String>) -> Self {
        self.game = game.into();
        self
    }

    pub fn gamename(mut self, gamename: impl Into<String>) -> Self {
        self.gamename = Some(gamename.into());
        self
    }

    pub fn datetime(mut self, datetime: DateTime<Utc>) -> Self {
        self.datetime = datetime;
        self
    }

    pub fn delta(mut self, delta: i64) -> Self {
        self.delta = delta;
        self
    }

    pub fn total(mut self, total: i64) -> Self {
        self.total = total;
        self
    }

    /// Builds and inserts the snapshot into the database.
    ///
    /// # Returns
    /// - `Ok(entity::playing_tracker::Model)` - Created snapshot entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::playing_tracker::Model, DbErr> {
        entity::playing_tracker::ActiveModel {
            steam64id: ActiveValue::Set(self.steam64id),
            game: ActiveValue::Set(self.game),
            gamename: ActiveValue::Set(self.gamename),
            datetime: ActiveValue::Set(self.datetime),
            delta_playing_time: ActiveValue::Set(self.delta),
            total_playing_time: ActiveValue::Set(self.total),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a snapshot for the given profile and game with the given total playtime.
pub async fn create_playing_tracker(
    db: &DatabaseConnection,
    steam64id: &str,
    game: &str,
    total: i64,
) -> Result<entity::playing_tracker::Model, DbErr> {
    PlayingTrackerFactory::new(db, steam64id)
        .game(game)
        .total(total)
        .build()
        .await
}
