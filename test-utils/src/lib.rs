//! Steam Widget Test Utils
//!
//! Shared testing utilities for the steam widget tracker. Provides a builder for test
//! contexts backed by in-memory SQLite databases, plus factories that insert profiles,
//! playtime snapshots and widget hits with sensible defaults.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::Profile;
//!
//! #[tokio::test]
//! async fn test_profile_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(Profile)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
