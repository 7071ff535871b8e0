use juniper::FieldResult;
use tracing::{info, warn};

use crate::domains::users::actions::register_user;
use crate::domains::users::data::{CreateUser, UserType};
use crate::server::graphql::context::GraphQLContext;

/// Register a new user
pub async fn create_user(
    username: String,
    password: String,
    email: String,
    ctx: &GraphQLContext,
) -> FieldResult<CreateUser> {
    info!(username = %username, "create_user mutation called");

    let user = register_user(&username, &email, &password, &ctx.db_pool)
        .await
        .map_err(|e| {
            warn!(error = %e, "User registration rejected");
            e
        })?;

    Ok(CreateUser {
        user: UserType::from(user),
    })
}
