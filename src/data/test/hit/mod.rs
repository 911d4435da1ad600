use crate::{data::hit::HitRepository, model::hit::CreateHitParam};
use chrono::{Duration, Utc};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod count;
mod create;
mod get_by_steam_id;
