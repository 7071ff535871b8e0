pub mod mutation;

pub use mutation::*;
