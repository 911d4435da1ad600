//! Business logic services.
//!
//! Services orchestrate repositories, the Steam Web API client and the tracker pool.

pub mod history;
pub mod metrics;
pub mod playtime;
pub mod steam_api;
pub mod tracking;
