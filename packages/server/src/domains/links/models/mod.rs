pub mod link;
pub mod vote;

pub use link::{escape_like, validate_url, Link, LinkFilter, NewLink};
pub use vote::Vote;
