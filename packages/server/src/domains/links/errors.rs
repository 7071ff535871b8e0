use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum LinkError {
    #[error("Enter a valid URL: {0}")]
    InvalidUrl(String),

    #[error("{0} must not be negative")]
    NegativeArgument(&'static str),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum VoteError {
    #[error("You must be logged in to vote")]
    AnonymousVoter,

    #[error("Invalid link")]
    InvalidLink,
}
