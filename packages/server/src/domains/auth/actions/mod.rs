//! Auth actions

pub mod authenticate;

pub use authenticate::*;
