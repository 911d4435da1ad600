//! Domain models and operation-specific parameter types.
//!
//! Entity models from the `entity` crate are converted into these types at the
//! repository boundary so services never handle SeaORM models directly.

pub mod hit;
pub mod playtime;
pub mod profile;
pub mod steam;
