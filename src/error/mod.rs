//! Error types for the tracker.
//!
//! `AppError` is the top-level error that wraps domain-specific errors. Background jobs
//! log it and move on; the binary returns it from `main` when startup fails.

pub mod config;
pub mod internal;
pub mod steam;

use thiserror::Error;

use crate::error::{config::ConfigError, internal::InternalError, steam::SteamApiError};

/// Top-level application error type.
///
/// Aggregates every error that can occur in the service. Most variants use `#[from]`
/// for automatic conversion with `?`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Steam Web API error.
    #[error(transparent)]
    SteamApiErr(#[from] SteamApiError),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// I/O error, e.g. while installing the shutdown signal handler.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Unexpected internal state.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Resource not found error.
    ///
    /// # Fields
    /// - Message describing what resource was not found
    #[error("{0}")]
    NotFound(String),
}

/// HTTP client construction fails only on TLS backend initialization.
impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::SteamApiErr(SteamApiError::Request(err))
    }
}
