use steam_widget::{
    config::Config, error::AppError, scheduler::tracking, startup, state::AppState,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let http_client = startup::setup_reqwest_client()?;
    let steam = startup::setup_steam_client(&config, http_client);

    let pool = startup::start_tracker(&config.tracker, db.clone(), steam.clone());
    let state = AppState::new(db, steam, pool);

    let mut scheduler = if config.scheduler_enabled {
        Some(tracking::start_scheduler(state.clone(), &config.tracking_schedule).await?)
    } else {
        info!("Tracking scheduler disabled on this instance");
        None
    };

    info!("Steam widget tracker running; press Ctrl+C to stop");
    tokio::signal::ctrl_c().await?;

    if let Some(scheduler) = scheduler.as_mut() {
        scheduler.shutdown().await?;
    }

    info!("Shutdown complete");
    Ok(())
}
