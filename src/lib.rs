//! Steam playtime tracker.
//!
//! Periodically records how long opted-in Steam profiles played each game. A cron
//! dispatcher submits one job per tracked profile to a bounded worker pool; jobs the
//! pool cannot take are parked in an overflow buffer and resubmitted by a drain loop.
//! Each job diffs the lifetime playtime reported by Steam against the latest stored
//! snapshot and writes the difference.
//!
//! # Layout
//!
//! - **Configuration** (`config`) - Environment-based configuration
//! - **Model Layer** (`model/`) - Domain models and parameter types
//! - **Data Layer** (`data/`) - SeaORM repositories returning domain models
//! - **Service Layer** (`service/`) - Steam API client, recorder, tracking and history
//! - **Worker** (`worker/`) - Worker pool, overflow buffer and drain loop
//! - **Scheduler** (`scheduler/`) - Cron dispatcher
//! - **Startup** (`startup`) - Database, HTTP client, tracing and tracker setup

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
pub mod worker;
