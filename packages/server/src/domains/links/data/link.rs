use chrono::{DateTime, Utc};
use juniper::FieldResult;

use crate::common::{LinkId, UserId};
use crate::domains::links::data::VoteType;
use crate::domains::links::models::Link;
use crate::domains::users::data::UserType;
use crate::server::graphql::context::GraphQLContext;

/// Link GraphQL data type
#[derive(Debug, Clone)]
pub struct LinkType {
    pub id: LinkId,
    pub url: String,
    pub description: String,
    pub posted_by_id: Option<UserId>,
    pub created_at: DateTime<Utc>,
}

impl From<Link> for LinkType {
    fn from(link: Link) -> Self {
        Self {
            id: link.id,
            url: link.url,
            description: link.description,
            posted_by_id: link.posted_by_id,
            created_at: link.created_at,
        }
    }
}

#[juniper::graphql_object(context = GraphQLContext)]
impl LinkType {
    fn id(&self) -> i32 {
        self.id.into_inner()
    }

    fn url(&self) -> &str {
        &self.url
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// The user who submitted this link, if it was submitted while logged in
    async fn posted_by(&self, ctx: &GraphQLContext) -> FieldResult<Option<UserType>> {
        let Some(user_id) = self.posted_by_id else {
            return Ok(None);
        };
        Ok(ctx.loaders.user.load(user_id).await?.map(UserType::from))
    }

    async fn votes(&self, ctx: &GraphQLContext) -> FieldResult<Vec<VoteType>> {
        let votes = ctx.loaders.link_votes.load(self.id).await?;
        Ok(votes.into_iter().map(VoteType::from).collect())
    }
}

/// Result of the `createLink` mutation
#[derive(Debug, Clone, juniper::GraphQLObject)]
#[graphql(context = GraphQLContext)]
pub struct CreateLink {
    pub id: i32,
    pub url: String,
    pub description: String,
    pub posted_by: Option<UserType>,
}
