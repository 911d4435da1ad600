use crate::{
    data::playing_tracker::PlayingTrackerRepository, error::AppError,
    model::playtime::CreateSnapshotParam,
};
use chrono::{Duration, Utc};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete_by_steam_id;
mod find_latest;
mod get_by_steam_id;
