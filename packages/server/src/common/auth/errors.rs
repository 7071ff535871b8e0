use thiserror::Error;

/// Authentication errors surfaced to GraphQL clients
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Not logged in")]
    AuthenticationRequired,

    #[error("Please enter valid credentials")]
    InvalidCredentials,

    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("Internal error: {0}")]
    InternalError(#[from] anyhow::Error),
}
