//! Hit factory for creating test widget hits.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test hits.
pub struct HitFactory<'a> {
    db: &'a DatabaseConnection,
    steam64id: String,
    datetime: DateTime<Utc>,
    purpose: String,
    ip: Option<String>,
}

impl<'a> HitFactory<'a> {
    /// Creates a new HitFactory with default values.
    ///
    /// Defaults:
    /// - datetime: now
    /// - purpose: `"widget"`
    /// - ip: none
    pub fn new(db: &'a DatabaseConnection, steam64id: impl Into<String>) -> Self {
        Self {
            db,
            steam64id: steam64id.into(),
            datetime: Utc::now(),
            purpose: "widget".to_string(),
            ip: None,
        }
    }

    pub fn datetime(mut self, datetime: DateTime<Utc>) -> Self {
        self.datetime = datetime;
        self
    }

    pub fn purpose(mut self, purpose: impl Into<String>) -> Self {
        self.purpose = purpose.into();
        self
    }

    pub fn ip(mut self, ip: impl Into<String>) -> Self {
        self.ip = Some(ip.into());
        self
    }

    /// Builds and inserts the hit into the database.
    ///
    /// # Returns
    /// - `Ok(entity::hit::Model)` - Created hit entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::hit::Model, DbErr> {
        entity::hit::ActiveModel {
            steam64id: ActiveValue::Set(self.steam64id),
            datetime: ActiveValue::Set(self.datetime),
            purpose: ActiveValue::Set(self.purpose),
            ip: ActiveValue::Set(self.ip),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a hit for the given profile and purpose, stamped now.
pub async fn create_hit(
    db: &DatabaseConnection,
    steam64id: &str,
    purpose: &str,
) -> Result<entity::hit::Model, DbErr> {
    HitFactory::new(db, steam64id).purpose(purpose).build().await
}
