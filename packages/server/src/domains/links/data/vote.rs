use chrono::{DateTime, Utc};
use juniper::{FieldError, FieldResult};

use crate::common::{LinkId, UserId, VoteId};
use crate::domains::links::data::LinkType;
use crate::domains::links::models::Vote;
use crate::domains::users::data::UserType;
use crate::server::graphql::context::GraphQLContext;

/// Vote GraphQL data type
#[derive(Debug, Clone)]
pub struct VoteType {
    pub id: VoteId,
    pub user_id: UserId,
    pub link_id: LinkId,
    pub created_at: DateTime<Utc>,
}

impl From<Vote> for VoteType {
    fn from(vote: Vote) -> Self {
        Self {
            id: vote.id,
            user_id: vote.user_id,
            link_id: vote.link_id,
            created_at: vote.created_at,
        }
    }
}

#[juniper::graphql_object(context = GraphQLContext)]
impl VoteType {
    fn id(&self) -> i32 {
        self.id.into_inner()
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    async fn user(&self, ctx: &GraphQLContext) -> FieldResult<UserType> {
        ctx.loaders
            .user
            .load(self.user_id)
            .await?
            .map(UserType::from)
            .ok_or_else(|| FieldError::new("User not found", juniper::Value::null()))
    }

    async fn link(&self, ctx: &GraphQLContext) -> FieldResult<LinkType> {
        ctx.loaders
            .link
            .load(self.link_id)
            .await?
            .map(LinkType::from)
            .ok_or_else(|| FieldError::new("Link not found", juniper::Value::null()))
    }
}

/// Result of the `createVote` mutation
#[derive(Debug, Clone, juniper::GraphQLObject)]
#[graphql(context = GraphQLContext)]
pub struct CreateVote {
    pub user: UserType,
    pub link: LinkType,
}
