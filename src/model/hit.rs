//! Widget hit domain models and metric series.

use chrono::{DateTime, NaiveDate, Utc};

/// One recorded widget request.
#[derive(Debug, Clone, PartialEq)]
pub struct Hit {
    pub id: i64,
    /// Steam64 id of the profile the widget was rendered for.
    pub steam_id: String,
    pub recorded_at: DateTime<Utc>,
    /// Widget or endpoint that served the request.
    pub purpose: String,
    /// Client address, when known.
    pub ip: Option<String>,
}

impl Hit {
    /// Converts an entity model to a hit domain model at the repository boundary.
    pub fn from_entity(entity: entity::hit::Model) -> Self {
        Self {
            id: entity.id,
            steam_id: entity.steam64id,
            recorded_at: entity.datetime,
            purpose: entity.purpose,
            ip: entity.ip,
        }
    }
}

/// Parameters for storing a hit row.
#[derive(Debug, Clone)]
pub struct CreateHitParam {
    pub steam_id: String,
    pub purpose: String,
    pub ip: Option<String>,
}

/// Parameters for recording a widget request against a profile.
///
/// The profile is created on its first hit; `name` refreshes the stored persona name
/// unless it is empty.
#[derive(Debug, Clone)]
pub struct RecordHitParam {
    pub steam_id: String,
    pub name: String,
    pub purpose: String,
    pub ip: Option<String>,
}

/// Hits for one profile, purpose and UTC calendar day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileHitDay {
    pub purpose: String,
    pub date: NaiveDate,
    pub count: u64,
}

/// Hits across every profile for one UTC calendar day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HitDay {
    pub date: NaiveDate,
    pub count: u64,
}
