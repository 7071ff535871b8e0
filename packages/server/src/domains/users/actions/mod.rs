//! User actions
//!
//! Shared by the GraphQL mutations and the `manage` CLI.

pub mod register_user;

pub use register_user::*;
