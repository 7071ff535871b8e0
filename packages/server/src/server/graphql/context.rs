use std::sync::Arc;

use anyhow::Result;
use sqlx::PgPool;

use crate::common::AuthError;
use crate::domains::auth::JwtService;
use crate::domains::users::models::User;
use crate::server::graphql::loaders::DataLoaders;
use crate::server::middleware::AuthUser;

/// GraphQL request context
///
/// Built once per request: shared resources plus the caller's identity and a
/// fresh set of loaders so batching never leaks across requests.
#[derive(Clone)]
pub struct GraphQLContext {
    pub db_pool: PgPool,
    pub auth_user: Option<AuthUser>,
    pub jwt_service: Arc<JwtService>,
    pub loaders: Arc<DataLoaders>,
}

impl juniper::Context for GraphQLContext {}

impl GraphQLContext {
    pub fn new(db_pool: PgPool, auth_user: Option<AuthUser>, jwt_service: Arc<JwtService>) -> Self {
        let loaders = Arc::new(DataLoaders::new(Arc::new(db_pool.clone())));
        Self {
            db_pool,
            auth_user,
            jwt_service,
            loaders,
        }
    }

    /// The authenticated caller's user row.
    ///
    /// `None` when the request is anonymous or the token names a user that no
    /// longer exists.
    pub async fn current_user(&self) -> Result<Option<User>> {
        match &self.auth_user {
            Some(auth) => User::find_by_id(auth.user_id, &self.db_pool).await,
            None => Ok(None),
        }
    }

    /// Like `current_user`, but anonymous callers are an error
    pub async fn require_user(&self) -> Result<User> {
        self.current_user()
            .await?
            .ok_or_else(|| AuthError::AuthenticationRequired.into())
    }
}
