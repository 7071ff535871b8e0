//! Links domain - submitted URLs and the votes cast on them
//!
//! Exposed twice over GraphQL: as plain list types (`LinkType`, `VoteType`)
//! and as Relay nodes with cursor connections (`LinkNode`, `VoteNode`).

pub mod actions;
pub mod data;
pub mod edges;
pub mod errors;
pub mod loader;
pub mod models;

pub use data::{CreateLink, CreateVote, LinkType, VoteType};
pub use errors::{LinkError, VoteError};
pub use models::{Link, LinkFilter, NewLink, Vote};
