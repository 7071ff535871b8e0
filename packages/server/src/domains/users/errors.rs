use thiserror::Error;

/// Validation failures when registering a user
#[derive(Error, Debug, PartialEq, Eq)]
pub enum UserError {
    #[error("Username must not be empty")]
    EmptyUsername,

    #[error("Username already taken")]
    UsernameTaken,

    #[error("Password must be at least {0} characters")]
    PasswordTooShort(usize),
}
