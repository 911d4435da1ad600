//! Factory methods for creating test data.
//!
//! Each entity has a `Factory` builder for customization and a `create_*` shorthand for
//! default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let profile = factory::profile::ProfileFactory::new(&db)
//!     .steam_id("76561197960287930")
//!     .tracking(true)
//!     .build()
//!     .await?;
//!
//! let snapshot = factory::playing_tracker::PlayingTrackerFactory::new(&db, &profile.steam64id)
//!     .game("440")
//!     .total(120)
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod hit;
pub mod playing_tracker;
pub mod profile;

pub use hit::create_hit;
pub use playing_tracker::create_playing_tracker;
pub use profile::{create_profile, create_tracked_profile};
