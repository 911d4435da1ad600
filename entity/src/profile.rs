use sea_orm::entity::prelude::*;

/// Steam profile known to the service.
///
/// `tracking` marks profiles that opted into periodic playtime tracking.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "profile")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub steam64id: String,
    pub name: Option<String>,
    #[sea_orm(default_value = 0)]
    pub hits: i64,
    #[sea_orm(default_value = false)]
    pub tracking: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
