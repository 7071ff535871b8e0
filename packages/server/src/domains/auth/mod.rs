//! Auth domain - username/password login and JWT issuance
//!
//! Responsibilities:
//! - Password hashing and verification (Argon2id)
//! - JWT token creation/verification
//! - `tokenAuth` / `verifyToken` mutations

pub mod actions;
pub mod data;
pub mod edges;
pub mod jwt;
pub mod password;

pub use data::{ObtainToken, VerifyToken};
pub use jwt::{Claims, JwtService};
