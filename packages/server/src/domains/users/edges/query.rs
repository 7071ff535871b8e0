use juniper::FieldResult;
use tracing::info;

use crate::domains::users::{data::UserType, models::User};
use crate::server::graphql::context::GraphQLContext;

/// Get all users
pub async fn get_users(ctx: &GraphQLContext) -> FieldResult<Vec<UserType>> {
    info!("get_users query called");

    let users = User::find_all(&ctx.db_pool).await?;

    Ok(users.into_iter().map(UserType::from).collect())
}

/// Get the user making the request
pub async fn get_me(ctx: &GraphQLContext) -> FieldResult<UserType> {
    let user = ctx.require_user().await?;

    Ok(UserType::from(user))
}
