//! GraphQL schema definition.

use super::context::GraphQLContext;
use juniper::{EmptySubscription, FieldResult, RootNode, ID};

use crate::common::PaginationArgs;

// Domain edges
use crate::domains::auth::edges as auth_edges;
use crate::domains::links::edges as link_edges;
use crate::domains::users::edges as user_edges;

// Domain data types (GraphQL types)
use crate::domains::auth::data::{ObtainToken, VerifyToken};
use crate::domains::links::data::{
    CreateLink, CreateVote, LinkNode, LinkNodeConnection, LinkType, NodeValue,
    RelayCreateLinkInput, RelayCreateLinkPayload, VoteType,
};
use crate::domains::users::data::{CreateUser, UserType};

pub struct Query;

#[juniper::graphql_object(context = GraphQLContext)]
impl Query {
    // =========================================================================
    // Link Queries
    // =========================================================================

    /// List links in submission order
    ///
    /// Arguments:
    /// - search: keep links whose url or description contains this term (case-insensitive)
    /// - first: return at most N links
    /// - skip: skip the first N links
    async fn links(
        ctx: &GraphQLContext,
        search: Option<String>,
        first: Option<i32>,
        skip: Option<i32>,
    ) -> FieldResult<Vec<LinkType>> {
        link_edges::get_links(search, first, skip, ctx).await
    }

    /// List every vote
    async fn votes(ctx: &GraphQLContext) -> FieldResult<Vec<VoteType>> {
        link_edges::get_votes(ctx).await
    }

    // =========================================================================
    // Relay Queries
    // =========================================================================

    /// Get a single link by its global ID
    async fn relay_link(ctx: &GraphQLContext, id: ID) -> FieldResult<Option<LinkNode>> {
        link_edges::relay_link(id, ctx).await
    }

    /// Fetch any object by its global ID
    async fn node(ctx: &GraphQLContext, id: ID) -> FieldResult<Option<NodeValue>> {
        link_edges::get_node(id, ctx).await
    }

    /// Get paginated links with cursor-based pagination (Relay spec)
    ///
    /// Arguments:
    /// - url, description: exact-match filters
    /// - first/after: forward pagination
    /// - last/before: backward pagination
    async fn relay_links(
        ctx: &GraphQLContext,
        url: Option<String>,
        description: Option<String>,
        first: Option<i32>,
        after: Option<String>,
        last: Option<i32>,
        before: Option<String>,
    ) -> FieldResult<LinkNodeConnection> {
        let pagination_args = PaginationArgs {
            first,
            after,
            last,
            before,
        };

        link_edges::relay_links(url, description, pagination_args, ctx).await
    }

    // =========================================================================
    // User Queries
    // =========================================================================

    async fn users(ctx: &GraphQLContext) -> FieldResult<Vec<UserType>> {
        user_edges::get_users(ctx).await
    }

    /// The user making the request
    async fn me(ctx: &GraphQLContext) -> FieldResult<UserType> {
        user_edges::get_me(ctx).await
    }
}

pub struct Mutation;

#[juniper::graphql_object(context = GraphQLContext)]
impl Mutation {
    // =========================================================================
    // Link Mutations
    // =========================================================================

    /// Submit a link; attributed to the caller when a valid token is sent
    async fn create_link(
        ctx: &GraphQLContext,
        url: String,
        description: Option<String>,
    ) -> FieldResult<CreateLink> {
        link_edges::create_link(url, description, ctx).await
    }

    /// Vote on a link (login required)
    async fn create_vote(ctx: &GraphQLContext, link_id: Option<i32>) -> FieldResult<CreateVote> {
        link_edges::create_vote(link_id, ctx).await
    }

    /// Relay flavour of `createLink`
    async fn relay_create_link(
        ctx: &GraphQLContext,
        input: RelayCreateLinkInput,
    ) -> FieldResult<RelayCreateLinkPayload> {
        link_edges::relay_create_link(input, ctx).await
    }

    // =========================================================================
    // User & Auth Mutations
    // =========================================================================

    async fn create_user(
        ctx: &GraphQLContext,
        username: String,
        password: String,
        email: String,
    ) -> FieldResult<CreateUser> {
        user_edges::create_user(username, password, email, ctx).await
    }

    /// Exchange username and password for a JWT
    async fn token_auth(
        ctx: &GraphQLContext,
        username: String,
        password: String,
    ) -> FieldResult<ObtainToken> {
        auth_edges::token_auth(username, password, ctx).await
    }

    fn verify_token(ctx: &GraphQLContext, token: String) -> FieldResult<VerifyToken> {
        auth_edges::verify_token(token, ctx)
    }
}

pub type Schema = RootNode<'static, Query, Mutation, EmptySubscription<GraphQLContext>>;

pub fn create_schema() -> Schema {
    Schema::new(Query, Mutation, EmptySubscription::new())
}
