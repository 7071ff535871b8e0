// Hacker News clone - API Core
//
// GraphQL backend for submitting links and voting on them, with a plain list
// surface and a Relay surface over the same data.
//
// Each domain lives in domains/<name>/ split into models, actions, data and edges.

pub mod common;
pub mod config;
pub mod db;
pub mod domains;
pub mod server;

pub use config::*;
