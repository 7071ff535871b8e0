use chrono::{DateTime, Utc};
use juniper::FieldResult;

use crate::common::UserId;
use crate::domains::links::data::{LinkType, VoteType};
use crate::domains::links::models::{Link, Vote};
use crate::domains::users::models::User;
use crate::server::graphql::context::GraphQLContext;

/// User GraphQL data type
///
/// Public representation of a user; the password hash is never exposed.
#[derive(Debug, Clone)]
pub struct UserType {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub date_joined: DateTime<Utc>,
}

impl From<User> for UserType {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            date_joined: user.date_joined,
        }
    }
}

#[juniper::graphql_object(context = GraphQLContext)]
impl UserType {
    fn id(&self) -> i32 {
        self.id.into_inner()
    }

    fn username(&self) -> &str {
        &self.username
    }

    fn email(&self) -> &str {
        &self.email
    }

    fn date_joined(&self) -> DateTime<Utc> {
        self.date_joined
    }

    /// Links submitted by this user
    async fn links(&self, ctx: &GraphQLContext) -> FieldResult<Vec<LinkType>> {
        let links = Link::find_by_poster(self.id, &ctx.db_pool).await?;
        Ok(links.into_iter().map(LinkType::from).collect())
    }

    /// Votes cast by this user
    async fn votes(&self, ctx: &GraphQLContext) -> FieldResult<Vec<VoteType>> {
        let votes = Vote::find_by_user(self.id, &ctx.db_pool).await?;
        Ok(votes.into_iter().map(VoteType::from).collect())
    }
}

/// Result of the `createUser` mutation
#[derive(Debug, Clone, juniper::GraphQLObject)]
#[graphql(context = GraphQLContext)]
pub struct CreateUser {
    pub user: UserType,
}
