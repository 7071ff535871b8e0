//! Links domain edges
//!
//! GraphQL entry points for both the plain and the Relay surface.

pub mod mutation;
pub mod query;
pub mod relay;

pub use mutation::*;
pub use query::*;
pub use relay::*;
