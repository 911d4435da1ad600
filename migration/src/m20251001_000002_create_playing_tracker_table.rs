use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PlayingTracker::Table)
                    .if_not_exists()
                    .col(pk_auto(PlayingTracker::Id))
                    .col(string(PlayingTracker::Steam64id))
                    .col(string(PlayingTracker::Game))
                    .col(string_null(PlayingTracker::Gamename))
                    .col(
                        timestamp_with_time_zone(PlayingTracker::Datetime)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(big_integer(PlayingTracker::DeltaPlayingTime).default(0))
                    .col(big_integer(PlayingTracker::TotalPlayingTime).default(0))
                    .to_owned(),
            )
            .await?;

        // Latest snapshot lookup per (profile, game)
        manager
            .create_index(
                Index::create()
                    .name("idx_playing_tracker_steam64id_game_datetime")
                    .table(PlayingTracker::Table)
                    .col(PlayingTracker::Steam64id)
                    .col(PlayingTracker::Game)
                    .col(PlayingTracker::Datetime)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_playing_tracker_steam64id_game_datetime")
                    .table(PlayingTracker::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PlayingTracker::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PlayingTracker {
    Table,
    Id,
    Steam64id,
    Game,
    Gamename,
    Datetime,
    DeltaPlayingTime,
    TotalPlayingTime,
}
