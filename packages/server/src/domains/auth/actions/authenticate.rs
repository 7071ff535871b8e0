use sqlx::PgPool;
use tracing::debug;

use crate::common::AuthError;
use crate::domains::auth::password::verify_password;
use crate::domains::users::models::User;

/// Look up a user by username and check the password.
///
/// Unknown usernames and wrong passwords produce the same error.
pub async fn authenticate(username: &str, password: &str, pool: &PgPool) -> Result<User, AuthError> {
    let user = User::find_by_username(username.trim(), pool)
        .await?
        .ok_or(AuthError::InvalidCredentials)?;

    if !verify_password(password, &user.password_hash) {
        debug!(username = %user.username, "Password mismatch");
        return Err(AuthError::InvalidCredentials);
    }

    Ok(user)
}
