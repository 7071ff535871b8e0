//! Authentication primitives shared by resolvers and middleware.
//!
//! Identity comes from a verified JWT (see `domains::auth::JwtService`);
//! resolvers that need a caller use `GraphQLContext::require_user`, which
//! fails with `AuthError::AuthenticationRequired` for anonymous requests.

mod errors;

pub use errors::AuthError;
