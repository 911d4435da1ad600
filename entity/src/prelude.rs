pub use super::hit::Entity as Hit;
pub use super::playing_tracker::Entity as PlayingTracker;
pub use super::profile::Entity as Profile;
