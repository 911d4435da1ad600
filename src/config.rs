use std::{str::FromStr, time::Duration};

use url::Url;

use crate::error::{config::ConfigError, AppError};

const STEAM_API_URL: &str = "https://api.steampowered.com/";
const TRACKING_SCHEDULE: &str = "0 0 * * * *";

/// Sizing of the tracker worker pool and its overflow buffer.
///
/// Read once at startup and passed to `TrackerPool::start` and `OverflowDrainer::new`.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackerPoolConfig {
    /// Workers kept alive for the lifetime of the pool.
    pub core_pool_size: usize,
    /// Upper bound on workers, including short-lived surge workers.
    pub max_pool_size: usize,
    /// Jobs that may wait in the pool's own queue.
    pub queue_capacity: usize,
    /// Jobs that may wait in the overflow buffer once the pool rejects them.
    pub overflow_capacity: usize,
    /// Jobs moved from the overflow buffer to the pool per drain tick.
    pub drain_batch_size: usize,
    /// Delay between drain ticks.
    pub drain_interval: Duration,
}

impl Default for TrackerPoolConfig {
    fn default() -> Self {
        Self {
            core_pool_size: 10,
            max_pool_size: 15,
            queue_capacity: 5000,
            overflow_capacity: 5000,
            drain_batch_size: 100,
            drain_interval: Duration::from_millis(5000),
        }
    }
}

pub struct Config {
    pub database_url: String,

    pub steam_api_key: String,
    pub steam_api_url: Url,

    /// Cron expression (with seconds) for the tracking dispatcher.
    pub tracking_schedule: String,
    /// Only the primary instance runs the dispatcher.
    pub scheduler_enabled: bool,

    pub tracker: TrackerPoolConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// `from_env` passes `std::env::var`; tests pass a map so they never touch the
    /// process environment.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of a variable, or `None` when unset
    ///
    /// # Returns
    /// - `Ok(Config)` - Every required variable present and every value valid
    /// - `Err(AppError::ConfigErr)` - Missing or invalid variable
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        let defaults = TrackerPoolConfig::default();
        let tracker = TrackerPoolConfig {
            core_pool_size: parse_or(&lookup, "TRACKER_CORE_POOL_SIZE", defaults.core_pool_size)?,
            max_pool_size: parse_or(&lookup, "TRACKER_MAX_POOL_SIZE", defaults.max_pool_size)?,
            queue_capacity: parse_or(&lookup, "TRACKER_QUEUE_CAPACITY", defaults.queue_capacity)?,
            overflow_capacity: parse_or(
                &lookup,
                "TRACKER_OVERFLOW_CAPACITY",
                defaults.overflow_capacity,
            )?,
            drain_batch_size: parse_or(
                &lookup,
                "TRACKER_OVERFLOW_DRAIN_BATCH_SIZE",
                defaults.drain_batch_size,
            )?,
            drain_interval: Duration::from_millis(parse_or(
                &lookup,
                "TRACKER_OVERFLOW_DRAIN_INTERVAL_MS",
                defaults.drain_interval.as_millis() as u64,
            )?),
        };
        validate_tracker(&tracker)?;

        let steam_api_url_raw =
            lookup("STEAM_API_URL").unwrap_or_else(|| STEAM_API_URL.to_string());
        let steam_api_url =
            Url::parse(&steam_api_url_raw).map_err(|e| ConfigError::InvalidEnvVar {
                name: "STEAM_API_URL".to_string(),
                value: steam_api_url_raw.clone(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            steam_api_key: required("STEAM_API_KEY")?,
            steam_api_url,
            tracking_schedule: lookup("TRACKING_SCHEDULE")
                .unwrap_or_else(|| TRACKING_SCHEDULE.to_string()),
            scheduler_enabled: parse_or(&lookup, "TRACKING_SCHEDULER_ENABLED", true)?,
            tracker,
        })
    }
}

/// Parses an optional variable, falling back to `default` when it is unset.
fn parse_or<F, T>(lookup: &F, name: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                reason: e.to_string(),
                value,
            }),
    }
}

fn validate_tracker(tracker: &TrackerPoolConfig) -> Result<(), ConfigError> {
    let invalid = |name: &str, value: usize, reason: &str| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    };

    if tracker.core_pool_size == 0 {
        return Err(invalid(
            "TRACKER_CORE_POOL_SIZE",
            tracker.core_pool_size,
            "must be at least 1",
        ));
    }
    if tracker.max_pool_size < tracker.core_pool_size {
        return Err(invalid(
            "TRACKER_MAX_POOL_SIZE",
            tracker.max_pool_size,
            "must not be smaller than TRACKER_CORE_POOL_SIZE",
        ));
    }
    if tracker.queue_capacity == 0 {
        return Err(invalid(
            "TRACKER_QUEUE_CAPACITY",
            tracker.queue_capacity,
            "must be at least 1",
        ));
    }
    if tracker.overflow_capacity == 0 {
        return Err(invalid(
            "TRACKER_OVERFLOW_CAPACITY",
            tracker.overflow_capacity,
            "must be at least 1",
        ));
    }
    if tracker.drain_batch_size == 0 {
        return Err(invalid(
            "TRACKER_OVERFLOW_DRAIN_BATCH_SIZE",
            tracker.drain_batch_size,
            "must be at least 1",
        ));
    }
    if tracker.drain_interval.is_zero() {
        return Err(ConfigError::InvalidEnvVar {
            name: "TRACKER_OVERFLOW_DRAIN_INTERVAL_MS".to_string(),
            value: tracker.drain_interval.as_millis().to_string(),
            reason: "must be at least 1".to_string(),
        });
    }

    Ok(())
}
