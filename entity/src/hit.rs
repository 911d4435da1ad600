use sea_orm::entity::prelude::*;

/// One widget request for a profile.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "hit")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub steam64id: String,
    pub datetime: DateTimeUtc,
    /// Widget or endpoint that served the request.
    pub purpose: String,
    pub ip: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
