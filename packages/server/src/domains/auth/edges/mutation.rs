use chrono::{TimeZone, Utc};
use juniper::FieldResult;
use tracing::info;

use crate::common::AuthError;
use crate::domains::auth::actions::authenticate;
use crate::domains::auth::data::{ObtainToken, VerifyToken};
use crate::domains::users::data::UserType;
use crate::server::graphql::context::GraphQLContext;

/// Exchange username/password for a JWT
pub async fn token_auth(
    username: String,
    password: String,
    ctx: &GraphQLContext,
) -> FieldResult<ObtainToken> {
    info!(username = %username, "token_auth mutation called");

    let user = authenticate(&username, &password, &ctx.db_pool).await?;
    let token = ctx
        .jwt_service
        .create_token(user.id, user.username.clone())?;

    Ok(ObtainToken {
        token,
        user: UserType::from(user),
    })
}

/// Check a token and report who it belongs to
pub fn verify_token(token: String, ctx: &GraphQLContext) -> FieldResult<VerifyToken> {
    let claims = ctx
        .jwt_service
        .verify_token(&token)
        .map_err(|_| AuthError::InvalidToken)?;

    let expires_at = Utc
        .timestamp_opt(claims.exp, 0)
        .single()
        .ok_or(AuthError::InvalidToken)?;

    Ok(VerifyToken {
        user_id: claims.user_id.into_inner(),
        username: claims.username,
        expires_at,
    })
}
