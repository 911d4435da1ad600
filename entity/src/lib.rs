//! SeaORM entity models for the steam widget database.

pub mod hit;
pub mod playing_tracker;
pub mod prelude;
pub mod profile;
