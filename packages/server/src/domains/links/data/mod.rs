pub mod link;
pub mod relay;
pub mod vote;

pub use link::*;
pub use relay::*;
pub use vote::*;
