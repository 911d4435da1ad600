use tokio_cron_scheduler::{Job, JobScheduler};
use tracing::{error, info};

use crate::{
    error::AppError,
    service::tracking::{DispatchSummary, TrackingService},
    state::AppState,
};

/// Starts the playtime tracking scheduler
///
/// On every tick all profiles with tracking enabled get a regular tracking job. Runs
/// are not serialized; a slow tick may overlap the next one.
///
/// # Arguments
/// - `state`: Shared database, Steam client and tracker pool
/// - `schedule`: Cron expression with seconds, e.g. `0 0 * * * *` for hourly
///
/// # Returns
/// - `Ok(JobScheduler)` - Running scheduler, kept by the caller for shutdown
/// - `Err(AppError::SchedulerErr)` - Invalid cron expression or scheduler failure
pub async fn start_scheduler(state: AppState, schedule: &str) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(schedule, move |_uuid, _lock| {
        let state = state.clone();

        Box::pin(async move {
            if let Err(e) = dispatch_tracking(&state).await {
                error!("Error dispatching tracking jobs: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    info!(schedule, "Tracking scheduler started");

    Ok(scheduler)
}

/// Submits tracking jobs for every tracked profile
async fn dispatch_tracking(state: &AppState) -> Result<DispatchSummary, AppError> {
    TrackingService::new(&state.db, &state.steam, &state.pool)
        .track_registered_users()
        .await
}
