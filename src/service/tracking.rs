//! Tracking dispatch and per-profile tracking toggles.

use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::{info, warn};

use crate::{
    data::{playing_tracker::PlayingTrackerRepository, profile::ProfileRepository},
    error::AppError,
    model::profile::{TrackingStatus, UpsertProfileParam},
    service::steam_api::SteamApiClient,
    worker::{
        pool::{SubmitOutcome, TrackerPool},
        TrackingJob,
    },
};

/// Counts from one dispatcher run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchSummary {
    /// Jobs accepted by the pool (on a worker or queued).
    pub submitted: usize,
    /// Jobs parked in the overflow buffer.
    pub overflowed: usize,
    /// Jobs dropped because pool and overflow buffer were full.
    pub dropped: usize,
    /// Profiles whose id could not be resolved.
    pub skipped: usize,
}

impl DispatchSummary {
    fn record(&mut self, outcome: SubmitOutcome) {
        match outcome {
            SubmitOutcome::IdleWorker | SubmitOutcome::Queued | SubmitOutcome::SurgeWorker => {
                self.submitted += 1
            }
            SubmitOutcome::Overflowed => self.overflowed += 1,
            SubmitOutcome::Dropped => self.dropped += 1,
        }
    }
}

/// Service deciding which profiles are tracked and handing their jobs to the pool.
pub struct TrackingService<'a> {
    db: &'a DatabaseConnection,
    steam: &'a SteamApiClient,
    pool: &'a TrackerPool,
}

impl<'a> TrackingService<'a> {
    /// Creates a new TrackingService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `steam` - Steam Web API client used for id resolution and player summaries
    /// - `pool` - Worker pool receiving tracking jobs
    pub fn new(
        db: &'a DatabaseConnection,
        steam: &'a SteamApiClient,
        pool: &'a TrackerPool,
    ) -> Self {
        Self { db, steam, pool }
    }

    /// Submits one regular tracking job per tracked profile.
    ///
    /// Profiles are resolved to their canonical id first. A profile that fails to
    /// resolve is logged and skipped; the rest of the batch continues.
    ///
    /// # Returns
    /// - `Ok(DispatchSummary)` - Where every job went
    /// - `Err(AppError::DbErr)` - Tracked profiles could not be loaded
    pub async fn track_registered_users(&self) -> Result<DispatchSummary, AppError> {
        let profiles = ProfileRepository::new(self.db).get_tracked().await?;
        let mut summary = DispatchSummary::default();

        for profile in &profiles {
            let steam_id = match self.steam.resolve_steam_id(&profile.steam_id).await {
                Ok(steam_id) => steam_id,
                Err(e) => {
                    warn!(
                        steam_id = %profile.steam_id,
                        error = %e,
                        "Failed to resolve Steam ID; skipping profile"
                    );
                    summary.skipped += 1;
                    continue;
                }
            };

            summary.record(self.pool.submit(TrackingJob::scheduled(steam_id)));
        }

        info!(
            profiles = profiles.len(),
            submitted = summary.submitted,
            overflowed = summary.overflowed,
            dropped = summary.dropped,
            skipped = summary.skipped,
            "Dispatched tracking jobs"
        );

        Ok(summary)
    }

    /// Enables tracking for a profile and records its baseline.
    ///
    /// Fetches the player summary to resolve the id and capture the persona name,
    /// upserts the profile with tracking on, then submits an initializing job.
    ///
    /// # Arguments
    /// - `id` - Steam64 id, vanity name or community URL
    ///
    /// # Returns
    /// - `Ok(SubmitOutcome)` - Where the initializing job went
    /// - `Err(AppError::SteamApiErr)` - Player could not be resolved or fetched
    /// - `Err(AppError::DbErr)` - Profile upsert failed
    pub async fn enable_tracking(&self, id: &str) -> Result<SubmitOutcome, AppError> {
        let player = self.steam.get_player_summary(id).await?;

        let profile = ProfileRepository::new(self.db)
            .upsert(UpsertProfileParam {
                steam_id: player.steamid,
                name: player.personaname,
                tracking: true,
            })
            .await?;

        info!(steam_id = %profile.steam_id, "Enabled playtime tracking");

        Ok(self
            .pool
            .submit(TrackingJob::initializing(profile.steam_id)))
    }

    /// Disables tracking for a profile and deletes its recorded history.
    ///
    /// # Arguments
    /// - `id` - Steam64 id, vanity name or community URL
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of deleted snapshots
    /// - `Err(AppError::SteamApiErr)` - Player could not be resolved or fetched
    /// - `Err(AppError::DbErr)` - Update or delete failed; neither is applied
    pub async fn disable_tracking(&self, id: &str) -> Result<u64, AppError> {
        let player = self.steam.get_player_summary(id).await?;

        let txn = self.db.begin().await?;
        let profile = ProfileRepository::new(&txn)
            .upsert(UpsertProfileParam {
                steam_id: player.steamid,
                name: player.personaname,
                tracking: false,
            })
            .await?;
        let deleted = PlayingTrackerRepository::new(&txn)
            .delete_by_steam_id(&profile.steam_id)
            .await?;
        txn.commit().await?;

        info!(
            steam_id = %profile.steam_id,
            deleted,
            "Disabled playtime tracking"
        );

        Ok(deleted)
    }

    /// Flips the tracking flag of a profile.
    ///
    /// Unknown profiles count as untracked, so the first toggle enables tracking.
    ///
    /// # Returns
    /// - `Ok(TrackingStatus)` - State after the toggle
    /// - `Err(AppError)` - Resolution, API or database failure
    pub async fn toggle_tracking(&self, id: &str) -> Result<TrackingStatus, AppError> {
        match self.tracking_status(id).await? {
            TrackingStatus::Enabled => {
                self.disable_tracking(id).await?;
                Ok(TrackingStatus::Disabled)
            }
            TrackingStatus::Disabled => {
                self.enable_tracking(id).await?;
                Ok(TrackingStatus::Enabled)
            }
        }
    }

    /// Reports whether a profile is tracked.
    ///
    /// # Returns
    /// - `Ok(TrackingStatus)` - Disabled for unknown profiles
    /// - `Err(AppError)` - Resolution or database failure
    pub async fn tracking_status(&self, id: &str) -> Result<TrackingStatus, AppError> {
        let steam_id = self.steam.resolve_steam_id(id).await?;

        let active = ProfileRepository::new(self.db)
            .is_tracking_active(&steam_id)
            .await?;

        Ok(TrackingStatus::from(active))
    }
}
