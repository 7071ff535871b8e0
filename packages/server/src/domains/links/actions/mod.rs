//! Link actions
//!
//! Write paths shared by the plain and Relay mutations.

pub mod cast_vote;
pub mod submit_link;

pub use cast_vote::*;
pub use submit_link::*;
