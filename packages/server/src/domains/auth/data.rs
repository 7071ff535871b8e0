use chrono::{DateTime, Utc};

use crate::domains::users::data::UserType;
use crate::server::graphql::context::GraphQLContext;

/// Result of `tokenAuth`: a bearer token plus the user it identifies
#[derive(Debug, Clone, juniper::GraphQLObject)]
#[graphql(context = GraphQLContext)]
pub struct ObtainToken {
    pub token: String,
    pub user: UserType,
}

/// Result of `verifyToken`
#[derive(Debug, Clone, juniper::GraphQLObject)]
pub struct VerifyToken {
    pub user_id: i32,
    pub username: String,
    pub expires_at: DateTime<Utc>,
}
