//! Profile domain models and parameters.

/// Steam profile known to the tracker.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    /// Steam64 id of the profile.
    pub steam_id: String,
    /// Persona name captured the last time the profile was upserted.
    pub name: Option<String>,
    /// Widget hits recorded for the profile.
    pub hits: i64,
    /// Whether periodic playtime tracking is enabled.
    pub tracking: bool,
}

impl Profile {
    /// Converts an entity model to a profile domain model at the repository boundary.
    pub fn from_entity(entity: entity::profile::Model) -> Self {
        Self {
            steam_id: entity.steam64id,
            name: entity.name,
            hits: entity.hits,
            tracking: entity.tracking,
        }
    }
}

/// Parameters for inserting or updating a profile when tracking is toggled.
///
/// New profiles start with zero hits; existing profiles keep their hit count and only
/// have name and tracking flag replaced.
#[derive(Debug, Clone)]
pub struct UpsertProfileParam {
    /// Steam64 id of the profile.
    pub steam_id: String,
    /// Current persona name.
    pub name: String,
    /// New tracking flag.
    pub tracking: bool,
}

/// Tracking state of a profile after a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackingStatus {
    Enabled,
    Disabled,
}

impl From<bool> for TrackingStatus {
    fn from(tracking: bool) -> Self {
        if tracking {
            Self::Enabled
        } else {
            Self::Disabled
        }
    }
}
