use juniper::{FieldResult, ID};
use tracing::{info, warn};

use crate::common::{GlobalId, LinkId, PaginationArgs, VoteId};
use crate::domains::links::actions::submit_link;
use crate::domains::links::data::{
    validate_pagination, LinkNode, LinkNodeConnection, NodeValue, RelayCreateLinkInput,
    RelayCreateLinkPayload, VoteNode, LINK_NODE, VOTE_NODE,
};
use crate::domains::links::models::{Link, LinkFilter, Vote};
use crate::server::graphql::context::GraphQLContext;

/// Fetch one link by its Relay global id
pub async fn relay_link(id: ID, ctx: &GraphQLContext) -> FieldResult<Option<LinkNode>> {
    let pk = GlobalId::decode_as(&id, LINK_NODE)?;

    Ok(ctx.loaders.link.load(LinkId::new(pk)).await?.map(LinkNode::from))
}

/// Resolve any node type from its global id
pub async fn get_node(id: ID, ctx: &GraphQLContext) -> FieldResult<Option<NodeValue>> {
    let global_id = GlobalId::decode(&id)?;

    let node = match global_id.type_name.as_str() {
        LINK_NODE => ctx
            .loaders
            .link
            .load(LinkId::new(global_id.id))
            .await?
            .map(|link| LinkNode::from(link).into()),
        VOTE_NODE => Vote::find_by_id(VoteId::new(global_id.id), &ctx.db_pool)
            .await?
            .map(|vote| VoteNode::from(vote).into()),
        other => {
            warn!(type_name = %other, "node lookup for unknown type");
            None
        }
    };

    Ok(node)
}

/// Relay connection over links with exact-match filters
pub async fn relay_links(
    url: Option<String>,
    description: Option<String>,
    args: PaginationArgs,
    ctx: &GraphQLContext,
) -> FieldResult<LinkNodeConnection> {
    info!(url = ?url, description = ?description, "relay_links query called");

    let validated = validate_pagination(args)?;
    let filter = LinkFilter { url, description };

    Ok(LinkNodeConnection::load(&filter, &validated, &ctx.db_pool).await?)
}

/// Relay-style link submission with `clientMutationId` passthrough
pub async fn relay_create_link(
    input: RelayCreateLinkInput,
    ctx: &GraphQLContext,
) -> FieldResult<RelayCreateLinkPayload> {
    info!(url = %input.url, "relay_create_link mutation called");

    let poster = ctx.current_user().await?;
    let link: Link = submit_link(
        &input.url,
        input.description,
        poster.map(|u| u.id),
        &ctx.db_pool,
    )
    .await?;

    Ok(RelayCreateLinkPayload {
        link: LinkNode::from(link),
        client_mutation_id: input.client_mutation_id,
    })
}
