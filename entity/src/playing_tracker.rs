use sea_orm::entity::prelude::*;

/// Playtime snapshot for a single (profile, game) pair.
///
/// Playtime columns are stored in minutes, matching the Steam Web API.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "playing_tracker")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub steam64id: String,
    pub game: String,
    pub gamename: Option<String>,
    pub datetime: DateTimeUtc,
    #[sea_orm(default_value = 0)]
    pub delta_playing_time: i64,
    #[sea_orm(default_value = 0)]
    pub total_playing_time: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
