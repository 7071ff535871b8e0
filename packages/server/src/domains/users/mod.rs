//! Users domain - account records that links and votes are attributed to
//!
//! Users register with a username/password pair; the password is stored as an
//! Argon2id hash and never leaves the server.

pub mod actions;
pub mod data;
pub mod edges;
pub mod errors;
pub mod loader;
pub mod models;

pub use data::{CreateUser, UserType};
pub use errors::UserError;
pub use models::User;
