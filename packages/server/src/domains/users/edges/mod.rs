//! Users domain edges
//!
//! GraphQL entry points; the root schema delegates to these functions.

pub mod mutation;
pub mod query;

pub use mutation::*;
pub use query::*;
