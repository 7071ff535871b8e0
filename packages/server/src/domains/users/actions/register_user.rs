use anyhow::Result;
use sqlx::PgPool;
use tracing::info;

use crate::domains::auth::password::hash_password;
use crate::domains::users::errors::UserError;
use crate::domains::users::models::User;

pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Check registration input before touching the database
pub fn validate_registration(username: &str, password: &str) -> Result<(), UserError> {
    if username.trim().is_empty() {
        return Err(UserError::EmptyUsername);
    }
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(UserError::PasswordTooShort(MIN_PASSWORD_LENGTH));
    }
    Ok(())
}

/// Register a new user with a hashed password
pub async fn register_user(
    username: &str,
    email: &str,
    password: &str,
    pool: &PgPool,
) -> Result<User> {
    let username = username.trim();
    validate_registration(username, password)?;

    if User::find_by_username(username, pool).await?.is_some() {
        return Err(UserError::UsernameTaken.into());
    }

    let password_hash = hash_password(password)?;
    let user = User::create(username, email.trim(), &password_hash, pool).await?;

    info!(user_id = %user.id, username = %user.username, "User registered");

    Ok(user)
}
