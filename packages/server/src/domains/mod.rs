// Business domains
pub mod auth;
pub mod links;
pub mod users;
