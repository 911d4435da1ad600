//! Steam Web API payloads.
//!
//! Wrapper structs mirror the `{"response": {...}}` envelope Steam puts around every
//! answer. Only the fields the tracker reads are declared.

use serde::Deserialize;

/// Owned game with lifetime playtime.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OwnedGame {
    /// Steam app id.
    pub appid: u64,
    /// Display name, present when `include_appinfo` is requested.
    #[serde(default)]
    pub name: Option<String>,
    /// Lifetime playtime in minutes.
    #[serde(default)]
    pub playtime_forever: i64,
    /// Unix timestamp of the last session, 0 when never played.
    #[serde(default)]
    pub rtime_last_played: i64,
}

/// Player summary.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Player {
    pub steamid: String,
    #[serde(default)]
    pub personaname: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SteamResponse<T> {
    pub response: T,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct OwnedGamesResponse {
    /// Absent for private profiles.
    #[serde(default)]
    pub games: Vec<OwnedGame>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResolveVanityResponse {
    /// 1 on success, 42 when no match was found.
    pub success: i32,
    #[serde(default)]
    pub steamid: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PlayerSummariesResponse {
    #[serde(default)]
    pub players: Vec<Player>,
}
