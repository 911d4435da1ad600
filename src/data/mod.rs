//! Database repository layer.
//!
//! Repositories use SeaORM entity models internally and return domain models so the
//! service layer never sees entities. Every repository is generic over the connection
//! so the same code runs on a pooled connection or inside a transaction.

pub mod hit;
pub mod playing_tracker;
pub mod profile;

#[cfg(test)]
mod test;
