//! Relay node and connection types for links and votes.

use anyhow::Result;
use juniper::{FieldError, FieldResult, GraphQLInputObject, ID};
use sqlx::PgPool;

use crate::common::{
    build_page_info, to_global_id, Cursor, LinkId, PageInfo, PaginationArgs, UserId,
    ValidatedPaginationArgs, VoteId,
};
use crate::domains::links::models::{Link, LinkFilter, Vote};
use crate::domains::users::data::UserType;
use crate::server::graphql::context::GraphQLContext;

pub const LINK_NODE: &str = "LinkNode";
pub const VOTE_NODE: &str = "VoteNode";

/// An object with a globally unique ID
#[juniper::graphql_interface(for = [LinkNode, VoteNode], context = GraphQLContext)]
pub trait Node {
    /// The ID of the object
    fn id(&self) -> ID;
}

// ============================================================================
// Nodes
// ============================================================================

#[derive(Debug, Clone)]
pub struct LinkNode {
    pub id: LinkId,
    pub url: String,
    pub description: String,
    pub posted_by_id: Option<UserId>,
}

impl From<Link> for LinkNode {
    fn from(link: Link) -> Self {
        Self {
            id: link.id,
            url: link.url,
            description: link.description,
            posted_by_id: link.posted_by_id,
        }
    }
}

#[juniper::graphql_object(context = GraphQLContext, impl = NodeValue)]
impl LinkNode {
    /// The ID of the object
    fn id(&self) -> ID {
        ID::new(to_global_id(LINK_NODE, self.id.into_inner()))
    }

    fn url(&self) -> &str {
        &self.url
    }

    fn description(&self) -> &str {
        &self.description
    }

    async fn posted_by(&self, ctx: &GraphQLContext) -> FieldResult<Option<UserType>> {
        let Some(user_id) = self.posted_by_id else {
            return Ok(None);
        };
        Ok(ctx.loaders.user.load(user_id).await?.map(UserType::from))
    }

    async fn votes(
        &self,
        ctx: &GraphQLContext,
        first: Option<i32>,
        after: Option<String>,
        last: Option<i32>,
        before: Option<String>,
    ) -> FieldResult<VoteNodeConnection> {
        let validated = validate_pagination(PaginationArgs {
            first,
            after,
            last,
            before,
        })?;

        Ok(VoteNodeConnection::for_link(self.id, &validated, &ctx.db_pool).await?)
    }
}

#[derive(Debug, Clone)]
pub struct VoteNode {
    pub id: VoteId,
    pub user_id: UserId,
    pub link_id: LinkId,
}

impl From<Vote> for VoteNode {
    fn from(vote: Vote) -> Self {
        Self {
            id: vote.id,
            user_id: vote.user_id,
            link_id: vote.link_id,
        }
    }
}

#[juniper::graphql_object(context = GraphQLContext, impl = NodeValue)]
impl VoteNode {
    /// The ID of the object
    fn id(&self) -> ID {
        ID::new(to_global_id(VOTE_NODE, self.id.into_inner()))
    }

    async fn user(&self, ctx: &GraphQLContext) -> FieldResult<UserType> {
        ctx.loaders
            .user
            .load(self.user_id)
            .await?
            .map(UserType::from)
            .ok_or_else(|| FieldError::new("User not found", juniper::Value::null()))
    }

    async fn link(&self, ctx: &GraphQLContext) -> FieldResult<LinkNode> {
        ctx.loaders
            .link
            .load(self.link_id)
            .await?
            .map(LinkNode::from)
            .ok_or_else(|| FieldError::new("Link not found", juniper::Value::null()))
    }
}

// ============================================================================
// Connections
// ============================================================================

/// Validate Relay pagination arguments into a GraphQL-facing error
pub fn validate_pagination(args: PaginationArgs) -> FieldResult<ValidatedPaginationArgs> {
    args.validate()
        .map_err(|e| FieldError::new(e, juniper::Value::null()))
}

#[derive(Debug, Clone, juniper::GraphQLObject)]
#[graphql(context = GraphQLContext)]
pub struct LinkNodeEdge {
    pub node: LinkNode,
    pub cursor: String,
}

/// Connection type for paginated links (Relay spec)
#[derive(Debug, Clone)]
pub struct LinkNodeConnection {
    pub edges: Vec<LinkNodeEdge>,
    pub page_info: PageInfo,
    pub total_count: i32,
}

impl LinkNodeConnection {
    pub async fn load(
        filter: &LinkFilter,
        args: &ValidatedPaginationArgs,
        pool: &PgPool,
    ) -> Result<Self> {
        let (links, has_more) = Link::find_paginated(filter, args, pool).await?;
        let total_count = Link::count_filtered(filter, pool).await? as i32;

        let edges: Vec<LinkNodeEdge> = links
            .into_iter()
            .map(|link| LinkNodeEdge {
                cursor: Cursor::encode_id(link.id),
                node: LinkNode::from(link),
            })
            .collect();

        let page_info = build_page_info(
            has_more,
            args,
            edges.first().map(|e| e.cursor.clone()),
            edges.last().map(|e| e.cursor.clone()),
        );

        Ok(Self {
            edges,
            page_info,
            total_count,
        })
    }
}

#[juniper::graphql_object(context = GraphQLContext)]
impl LinkNodeConnection {
    /// A list of edges (link + cursor pairs)
    fn edges(&self) -> &[LinkNodeEdge] {
        &self.edges
    }

    fn page_info(&self) -> &PageInfo {
        &self.page_info
    }

    /// Total count of links matching the filter
    fn total_count(&self) -> i32 {
        self.total_count
    }
}

#[derive(Debug, Clone, juniper::GraphQLObject)]
#[graphql(context = GraphQLContext)]
pub struct VoteNodeEdge {
    pub node: VoteNode,
    pub cursor: String,
}

/// Connection type for paginated votes on a link (Relay spec)
#[derive(Debug, Clone)]
pub struct VoteNodeConnection {
    pub edges: Vec<VoteNodeEdge>,
    pub page_info: PageInfo,
    pub total_count: i32,
}

impl VoteNodeConnection {
    pub async fn for_link(
        link_id: LinkId,
        args: &ValidatedPaginationArgs,
        pool: &PgPool,
    ) -> Result<Self> {
        let (votes, has_more) = Vote::find_paginated_for_link(link_id, args, pool).await?;
        let total_count = Vote::count_for_link(link_id, pool).await? as i32;

        let edges: Vec<VoteNodeEdge> = votes
            .into_iter()
            .map(|vote| VoteNodeEdge {
                cursor: Cursor::encode_id(vote.id),
                node: VoteNode::from(vote),
            })
            .collect();

        let page_info = build_page_info(
            has_more,
            args,
            edges.first().map(|e| e.cursor.clone()),
            edges.last().map(|e| e.cursor.clone()),
        );

        Ok(Self {
            edges,
            page_info,
            total_count,
        })
    }
}

#[juniper::graphql_object(context = GraphQLContext)]
impl VoteNodeConnection {
    fn edges(&self) -> &[VoteNodeEdge] {
        &self.edges
    }

    fn page_info(&self) -> &PageInfo {
        &self.page_info
    }

    fn total_count(&self) -> i32 {
        self.total_count
    }
}

// ============================================================================
// Relay mutation input/payload
// ============================================================================

#[derive(Debug, Clone, GraphQLInputObject)]
pub struct RelayCreateLinkInput {
    pub url: String,
    pub description: Option<String>,
    pub client_mutation_id: Option<String>,
}

#[derive(Debug, Clone, juniper::GraphQLObject)]
#[graphql(context = GraphQLContext)]
pub struct RelayCreateLinkPayload {
    pub link: LinkNode,
    pub client_mutation_id: Option<String>,
}
