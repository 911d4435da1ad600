//! Steam Web API client.
//!
//! Wraps the three endpoints the tracker needs: vanity name resolution, owned games and
//! player summaries. Every request carries the API key as the `key` query parameter.

use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    error::{steam::SteamApiError, AppError},
    model::steam::{
        OwnedGame, OwnedGamesResponse, Player, PlayerSummariesResponse, ResolveVanityResponse,
        SteamResponse,
    },
};

const RESOLVE_VANITY_URL: &str = "ISteamUser/ResolveVanityURL/v0001/";
const GET_OWNED_GAMES: &str = "IPlayerService/GetOwnedGames/v0001/";
const GET_PLAYER_SUMMARIES: &str = "ISteamUser/GetPlayerSummaries/v0002/";

/// Community URL prefixes accepted in place of a bare id or vanity name.
const COMMUNITY_PREFIXES: [&str; 4] = [
    "https://steamcommunity.com/id/",
    "http://steamcommunity.com/id/",
    "https://steamcommunity.com/profiles/",
    "http://steamcommunity.com/profiles/",
];

/// Client for the Steam Web API.
///
/// Cheap to clone; `reqwest::Client` shares its connection pool between clones.
#[derive(Clone)]
pub struct SteamApiClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: String,
}

impl SteamApiClient {
    /// Creates a new SteamApiClient.
    ///
    /// # Arguments
    /// - `http` - Shared HTTP client, configured with a request timeout at startup
    /// - `base_url` - API root, e.g. `https://api.steampowered.com/`
    /// - `api_key` - Steam Web API key
    pub fn new(http: reqwest::Client, base_url: Url, api_key: impl Into<String>) -> Self {
        Self {
            http,
            base_url,
            api_key: api_key.into(),
        }
    }

    /// Resolves a user supplied id to a canonical Steam64 id.
    ///
    /// Accepts a Steam64 id, a vanity name, or a community profile URL. 17-digit
    /// numeric ids are returned without an API call.
    ///
    /// # Arguments
    /// - `id` - Steam64 id, vanity name or community URL
    ///
    /// # Returns
    /// - `Ok(String)` - Canonical Steam64 id
    /// - `Err(AppError::SteamApiErr(VanityNotResolved))` - Steam knows no such vanity name
    /// - `Err(AppError::SteamApiErr(Request))` - Request failed
    pub async fn resolve_steam_id(&self, id: &str) -> Result<String, AppError> {
        let trimmed = id.trim();
        if is_steam64_id(trimmed) {
            return Ok(trimmed.to_string());
        }

        let name = strip_community_prefix(trimmed);
        if is_steam64_id(name) {
            return Ok(name.to_string());
        }
        if name.is_empty() {
            return Err(SteamApiError::VanityNotResolved(id.to_string()).into());
        }

        let resolved: SteamResponse<ResolveVanityResponse> = self
            .get_json(RESOLVE_VANITY_URL, &[("vanityurl", name)])
            .await?;

        match resolved.response {
            ResolveVanityResponse {
                success: 1,
                steamid: Some(steam_id),
            } => Ok(steam_id),
            _ => Err(SteamApiError::VanityNotResolved(name.to_string()).into()),
        }
    }

    /// Fetches the owned games of a profile, free-to-play titles included.
    ///
    /// Private profiles answer without a game list, which is returned as empty.
    ///
    /// # Arguments
    /// - `steam_id` - Canonical Steam64 id
    ///
    /// # Returns
    /// - `Ok(Vec<OwnedGame>)` - Games, most recently played first
    /// - `Err(AppError::SteamApiErr(Request))` - Request failed or body undecodable
    pub async fn get_owned_games(&self, steam_id: &str) -> Result<Vec<OwnedGame>, AppError> {
        let owned: SteamResponse<OwnedGamesResponse> = self
            .get_json(
                GET_OWNED_GAMES,
                &[
                    ("steamid", steam_id),
                    ("include_appinfo", "1"),
                    ("include_played_free_games", "1"),
                    ("format", "json"),
                ],
            )
            .await?;

        let mut games = owned.response.games;
        games.sort_by(|a, b| b.rtime_last_played.cmp(&a.rtime_last_played));

        Ok(games)
    }

    /// Fetches the player summary, resolving the id first.
    ///
    /// # Arguments
    /// - `id` - Steam64 id, vanity name or community URL
    ///
    /// # Returns
    /// - `Ok(Player)` - Summary of the resolved player
    /// - `Err(AppError::SteamApiErr(PlayerNotFound))` - Steam returned no player
    /// - `Err(AppError::SteamApiErr(_))` - Resolution or request failed
    pub async fn get_player_summary(&self, id: &str) -> Result<Player, AppError> {
        let steam_id = self.resolve_steam_id(id).await?;

        let summaries: SteamResponse<PlayerSummariesResponse> = self
            .get_json(GET_PLAYER_SUMMARIES, &[("steamids", steam_id.as_str())])
            .await?;

        summaries
            .response
            .players
            .into_iter()
            .find(|player| player.steamid == steam_id)
            .ok_or_else(|| SteamApiError::PlayerNotFound(steam_id).into())
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<T, SteamApiError> {
        let url = self
            .base_url
            .join(endpoint)
            .map_err(|_| SteamApiError::InvalidEndpoint(endpoint.to_string()))?;

        let body = self
            .http
            .get(url)
            .query(&[("key", self.api_key.as_str())])
            .query(query)
            .send()
            .await?
            .error_for_status()?
            .json::<T>()
            .await?;

        Ok(body)
    }
}

fn is_steam64_id(id: &str) -> bool {
    id.len() == 17 && id.bytes().all(|b| b.is_ascii_digit())
}

fn strip_community_prefix(id: &str) -> &str {
    let stripped = COMMUNITY_PREFIXES
        .iter()
        .find_map(|prefix| id.strip_prefix(prefix))
        .unwrap_or(id);

    stripped.trim_matches('/')
}
