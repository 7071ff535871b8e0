// Common types and utilities shared across the application

pub mod auth;
pub mod entity_ids;
pub mod id;
pub mod pagination;
pub mod relay;

pub use auth::AuthError;
pub use entity_ids::*;
pub use id::Id;
pub use pagination::*;
pub use relay::{to_global_id, GlobalId, GlobalIdError};
