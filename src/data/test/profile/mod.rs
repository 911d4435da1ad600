use crate::{data::profile::ProfileRepository, model::profile::UpsertProfileParam};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod add_hit;
mod get_tracked;
mod is_tracking_active;
mod upsert;
