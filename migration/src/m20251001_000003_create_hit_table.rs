use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Hit::Table)
                    .if_not_exists()
                    .col(pk_auto(Hit::Id))
                    .col(string(Hit::Steam64id))
                    .col(
                        timestamp_with_time_zone(Hit::Datetime)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(string(Hit::Purpose))
                    .col(string_null(Hit::Ip))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_hit_steam64id_purpose")
                    .table(Hit::Table)
                    .col(Hit::Steam64id)
                    .col(Hit::Purpose)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_hit_steam64id_purpose")
                    .table(Hit::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Hit::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Hit {
    Table,
    Id,
    Steam64id,
    Datetime,
    Purpose,
    Ip,
}
