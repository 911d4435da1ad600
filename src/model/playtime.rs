//! Playtime snapshot domain models and history series.

use chrono::{DateTime, NaiveDate, Utc};

use crate::{error::AppError, util::parse::parse_u64_from_string};

/// Recorded playtime for one (profile, game) pair at one point in time.
///
/// `total_minutes` is Steam's lifetime playtime when the snapshot was taken and
/// `delta_minutes` is what was credited since the previous snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaytimeSnapshot {
    /// Row id, increasing with insertion order.
    pub id: i64,
    /// Steam64 id of the profile.
    pub steam_id: String,
    /// Steam app id of the game.
    pub app_id: u64,
    /// Game name as reported by Steam at recording time.
    pub game_name: Option<String>,
    /// When the snapshot was written.
    pub recorded_at: DateTime<Utc>,
    /// Minutes credited by this snapshot.
    pub delta_minutes: i64,
    /// Lifetime minutes observed.
    pub total_minutes: i64,
}

impl PlaytimeSnapshot {
    /// Converts an entity model to a snapshot domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(PlaytimeSnapshot)` - The converted snapshot
    /// - `Err(AppError::InternalErr(ParseStringId))` - Stored app id is not numeric
    pub fn from_entity(entity: entity::playing_tracker::Model) -> Result<Self, AppError> {
        let app_id = parse_u64_from_string(entity.game)?;

        Ok(Self {
            id: entity.id,
            steam_id: entity.steam64id,
            app_id,
            game_name: entity.gamename,
            recorded_at: entity.datetime,
            delta_minutes: entity.delta_playing_time,
            total_minutes: entity.total_playing_time,
        })
    }
}

/// Parameters for writing a new snapshot.
#[derive(Debug, Clone)]
pub struct CreateSnapshotParam {
    pub steam_id: String,
    pub app_id: u64,
    pub game_name: Option<String>,
    pub delta_minutes: i64,
    pub total_minutes: i64,
}

/// Minutes played for one game in one calendar month.
///
/// Gap entries inserted between the first and last tracked month carry an empty game
/// name and zero minutes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaytimeMonth {
    pub year: i32,
    pub month: u32,
    pub game_name: String,
    pub minutes: i64,
}

/// Minutes played for one game on one calendar day (UTC).
///
/// Gap entries carry an empty game name and zero minutes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaytimeDay {
    pub date: NaiveDate,
    pub game_name: String,
    pub minutes: i64,
}

impl PlaytimeMonth {
    /// Whole hours played.
    pub fn hours(&self) -> i64 {
        self.minutes / 60
    }
}

impl PlaytimeDay {
    /// Whole hours played.
    pub fn hours(&self) -> i64 {
        self.minutes / 60
    }
}
