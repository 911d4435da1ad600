//! Profile data repository for database operations.
//!
//! Provides the `ProfileRepository` for upserting profiles when tracking is toggled or a
//! widget is requested, and for enumerating the profiles the dispatcher has to visit.

use migration::OnConflict;
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};

use crate::model::profile::{Profile, UpsertProfileParam};

/// Repository providing database operations for profiles.
pub struct ProfileRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProfileRepository<'a, C> {
    /// Creates a new ProfileRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to a database connection or transaction
    ///
    /// # Returns
    /// - `ProfileRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a profile or updates name and tracking flag of an existing one.
    ///
    /// Hits are only set for new profiles (to 0); an existing hit count is preserved.
    /// An empty name is stored as `NULL`.
    ///
    /// # Arguments
    /// - `param` - Steam id, persona name and the new tracking flag
    ///
    /// # Returns
    /// - `Ok(Profile)` - The created or updated profile
    /// - `Err(DbErr)` - Database error during insert or update
    pub async fn upsert(&self, param: UpsertProfileParam) -> Result<Profile, DbErr> {
        let entity = entity::prelude::Profile::insert(entity::profile::ActiveModel {
            steam64id: ActiveValue::Set(param.steam_id),
            name: ActiveValue::Set(non_empty(param.name)),
            hits: ActiveValue::Set(0),
            tracking: ActiveValue::Set(param.tracking),
        })
        .on_conflict(
            OnConflict::column(entity::profile::Column::Steam64id)
                .update_columns([
                    entity::profile::Column::Name,
                    entity::profile::Column::Tracking,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(Profile::from_entity(entity))
    }

    /// Counts one widget hit for a profile, creating the profile on its first hit.
    ///
    /// New profiles start with one hit and tracking disabled. For existing profiles the
    /// counter is incremented in the database and the name is refreshed unless `name`
    /// is empty; the tracking flag is left alone.
    ///
    /// # Arguments
    /// - `steam_id` - Steam64 id of the profile
    /// - `name` - Current persona name, may be empty
    ///
    /// # Returns
    /// - `Ok(Profile)` - The profile with its updated hit count
    /// - `Err(DbErr)` - Database error during insert or update
    pub async fn add_hit(&self, steam_id: &str, name: String) -> Result<Profile, DbErr> {
        let name = non_empty(name);

        let mut on_conflict = OnConflict::column(entity::profile::Column::Steam64id);
        on_conflict.value(
            entity::profile::Column::Hits,
            Expr::col(entity::profile::Column::Hits).add(1),
        );
        if name.is_some() {
            on_conflict.update_column(entity::profile::Column::Name);
        }

        let entity = entity::prelude::Profile::insert(entity::profile::ActiveModel {
            steam64id: ActiveValue::Set(steam_id.to_string()),
            name: ActiveValue::Set(name),
            hits: ActiveValue::Set(1),
            tracking: ActiveValue::Set(false),
        })
        .on_conflict(on_conflict)
        .exec_with_returning(self.db)
        .await?;

        Ok(Profile::from_entity(entity))
    }

    /// Finds a profile by its Steam64 id.
    ///
    /// # Returns
    /// - `Ok(Some(Profile))` - Profile found
    /// - `Ok(None)` - No profile with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, steam_id: &str) -> Result<Option<Profile>, DbErr> {
        let entity = entity::prelude::Profile::find_by_id(steam_id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(Profile::from_entity))
    }

    /// Gets every profile with tracking enabled, ordered by Steam id.
    ///
    /// # Returns
    /// - `Ok(Vec<Profile>)` - Tracked profiles (empty if none)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_tracked(&self) -> Result<Vec<Profile>, DbErr> {
        let entities = entity::prelude::Profile::find()
            .filter(entity::profile::Column::Tracking.eq(true))
            .order_by_asc(entity::profile::Column::Steam64id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Profile::from_entity).collect())
    }

    /// Checks whether a profile exists and has tracking enabled.
    ///
    /// # Returns
    /// - `Ok(true)` - Profile exists with tracking enabled
    /// - `Ok(false)` - Profile missing or tracking disabled
    /// - `Err(DbErr)` - Database error during count query
    pub async fn is_tracking_active(&self, steam_id: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Profile::find()
            .filter(entity::profile::Column::Steam64id.eq(steam_id))
            .filter(entity::profile::Column::Tracking.eq(true))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}

fn non_empty(name: String) -> Option<String> {
    Some(name).filter(|name| !name.is_empty())
}
