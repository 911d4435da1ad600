//! Background execution of tracking jobs.
//!
//! Jobs flow through a bounded worker pool. When the pool and its internal queue are
//! saturated, jobs spill into the overflow buffer, and the drain loop feeds them back
//! into the pool once it has room again.

pub mod drain;
pub mod overflow;
pub mod pool;

use async_trait::async_trait;

use crate::error::AppError;

/// A request to record the playtime of one profile.
///
/// Jobs are never persisted. They live in the pool's queue, inside a running worker, or
/// in the overflow buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackingJob {
    /// Canonical Steam64 id of the profile.
    pub steam_id: String,
    /// Set for the first run after tracking is enabled; snapshots are written with a
    /// zero delta so lifetime playtime is not credited to the current hour.
    pub init: bool,
}

impl TrackingJob {
    /// Creates a job for the periodic dispatcher.
    pub fn scheduled(steam_id: impl Into<String>) -> Self {
        Self {
            steam_id: steam_id.into(),
            init: false,
        }
    }

    /// Creates the baseline job submitted when tracking is enabled.
    pub fn initializing(steam_id: impl Into<String>) -> Self {
        Self {
            steam_id: steam_id.into(),
            init: true,
        }
    }
}

/// Body executed by pool workers for every job.
///
/// Errors are logged by the pool and never stop the worker that ran the job.
#[async_trait]
pub trait JobRunner: Send + Sync + 'static {
    async fn run(&self, job: TrackingJob) -> Result<(), AppError>;
}
