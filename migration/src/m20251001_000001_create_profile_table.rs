use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Profile::Table)
                    .if_not_exists()
                    .col(string(Profile::Steam64id).primary_key())
                    .col(string_null(Profile::Name))
                    .col(big_integer(Profile::Hits).default(0))
                    .col(boolean(Profile::Tracking).default(false))
                    .to_owned(),
            )
            .await?;

        // Dispatcher enumerates tracked profiles every run
        manager
            .create_index(
                Index::create()
                    .name("idx_profile_tracking")
                    .table(Profile::Table)
                    .col(Profile::Tracking)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_profile_tracking")
                    .table(Profile::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Profile::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Profile {
    Table,
    Steam64id,
    Name,
    Hits,
    Tracking,
}
