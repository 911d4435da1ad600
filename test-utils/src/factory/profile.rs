//! Profile factory for creating test profile entities.

use crate::factory::helpers::next_steam_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test profiles with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let profile = ProfileFactory::new(&db)
///     .steam_id("76561197960287930")
///     .name("gaben")
///     .tracking(true)
///     .build()
///     .await?;
/// ```
pub struct ProfileFactory<'a> {
    db: &'a DatabaseConnection,
    steam64id: String,
    name: Option<String>,
    hits: i64,
    tracking: bool,
}

impl<'a> ProfileFactory<'a> {
    /// Creates a new ProfileFactory with default values.
    ///
    /// Defaults:
    /// - steam64id: unique 17-digit id
    /// - name: `"Player {steam64id}"`
    /// - hits: `0`
    /// - tracking: `false`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let steam64id = next_steam_id();
        Self {
            db,
            name: Some(format!("Player {}", steam64id)),
            steam64id,
            hits: 0,
            tracking: false,
        }
    }

    pub fn steam_id(mut self, steam64id: impl Into<String>) -> Self {
        self.steam64id = steam64id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn hits(mut self, hits: i64) -> Self {
        self.hits = hits;
        self
    }

    pub fn tracking(mut self, tracking: bool) -> Self {
        self.tracking = tracking;
        self
    }

    /// Builds and inserts the profile entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::profile::Model)` - Created profile entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::profile::Model, DbErr> {
        entity::profile::ActiveModel {
            steam64id: ActiveValue::Set(self.steam64id),
            name: ActiveValue::Set(self.name),
            hits: ActiveValue::Set(self.hits),
            tracking: ActiveValue::Set(self.tracking),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a profile with default values and tracking disabled.
pub async fn create_profile(db: &DatabaseConnection) -> Result<entity::profile::Model, DbErr> {
    ProfileFactory::new(db).build().await
}

/// Creates a profile with tracking enabled.
pub async fn create_tracked_profile(
    db: &DatabaseConnection,
) -> Result<entity::profile::Model, DbErr> {
    ProfileFactory::new(db).tracking(true).build().await
}
