//! Widget hit repository.
//!
//! Hits are append-only. Each row is one widget request; the per-profile counter on
//! the profile row is maintained separately by `ProfileRepository::add_hit`.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::hit::{CreateHitParam, Hit};

/// Repository providing database operations for widget hits.
pub struct HitRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> HitRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Writes a new hit stamped with the current time.
    ///
    /// # Returns
    /// - `Ok(Hit)` - The inserted hit
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateHitParam) -> Result<Hit, DbErr> {
        let entity = entity::hit::ActiveModel {
            steam64id: ActiveValue::Set(param.steam_id),
            datetime: ActiveValue::Set(Utc::now()),
            purpose: ActiveValue::Set(param.purpose),
            ip: ActiveValue::Set(param.ip),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Hit::from_entity(entity))
    }

    /// Counts hits for a profile, optionally restricted to one purpose.
    ///
    /// # Arguments
    /// - `steam_id` - Steam64 id of the profile
    /// - `purpose` - Only count hits with this purpose; `None` counts all
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of matching hits
    /// - `Err(DbErr)` - Database error during count query
    pub async fn count(&self, steam_id: &str, purpose: Option<&str>) -> Result<u64, DbErr> {
        let mut query =
            entity::prelude::Hit::find().filter(entity::hit::Column::Steam64id.eq(steam_id));
        if let Some(purpose) = purpose {
            query = query.filter(entity::hit::Column::Purpose.eq(purpose));
        }

        query.count(self.db).await
    }

    /// Counts hits across every profile.
    pub async fn count_all(&self) -> Result<u64, DbErr> {
        entity::prelude::Hit::find().count(self.db).await
    }

    /// Gets every hit for a profile in recording order.
    ///
    /// # Returns
    /// - `Ok(Vec<Hit>)` - Hits ordered by time, then id (empty if none)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_steam_id(&self, steam_id: &str) -> Result<Vec<Hit>, DbErr> {
        let entities = entity::prelude::Hit::find()
            .filter(entity::hit::Column::Steam64id.eq(steam_id))
            .order_by_asc(entity::hit::Column::Datetime)
            .order_by_asc(entity::hit::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Hit::from_entity).collect())
    }

    /// Gets every hit across all profiles in recording order.
    pub async fn get_all(&self) -> Result<Vec<Hit>, DbErr> {
        let entities = entity::prelude::Hit::find()
            .order_by_asc(entity::hit::Column::Datetime)
            .order_by_asc(entity::hit::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Hit::from_entity).collect())
    }
}
