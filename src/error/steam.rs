use thiserror::Error;

/// Errors returned by the Steam Web API client.
#[derive(Error, Debug)]
pub enum SteamApiError {
    /// Transport failure, timeout, non-success HTTP status or undecodable body.
    #[error("Steam Web API request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Failed to build the endpoint URL from the configured base URL.
    #[error("Invalid Steam Web API endpoint '{0}'")]
    InvalidEndpoint(String),

    /// The vanity name could not be resolved to a Steam64 id.
    #[error("Could not resolve vanity name '{0}' to a Steam ID")]
    VanityNotResolved(String),

    /// Player summaries did not contain the requested player.
    #[error("No Steam player found for '{0}'")]
    PlayerNotFound(String),
}
