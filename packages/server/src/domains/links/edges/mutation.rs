use juniper::FieldResult;
use tracing::{info, warn};

use crate::common::LinkId;
use crate::domains::links::actions::{cast_vote, submit_link};
use crate::domains::links::data::{CreateLink, CreateVote, LinkType};
use crate::domains::links::errors::VoteError;
use crate::domains::users::data::UserType;
use crate::server::graphql::context::GraphQLContext;

/// Submit a link, attributed to the caller when authenticated
pub async fn create_link(
    url: String,
    description: Option<String>,
    ctx: &GraphQLContext,
) -> FieldResult<CreateLink> {
    info!(url = %url, "create_link mutation called");

    let poster = ctx.current_user().await?;
    let link = submit_link(&url, description, poster.as_ref().map(|u| u.id), &ctx.db_pool)
        .await
        .map_err(|e| {
            warn!(error = %e, "Link submission rejected");
            e
        })?;

    Ok(CreateLink {
        id: link.id.into_inner(),
        url: link.url,
        description: link.description,
        posted_by: poster.map(UserType::from),
    })
}

/// Vote on a link as the calling user
pub async fn create_vote(link_id: Option<i32>, ctx: &GraphQLContext) -> FieldResult<CreateVote> {
    info!(link_id = ?link_id, "create_vote mutation called");

    let voter = ctx.current_user().await?;
    let (_vote, link) = cast_vote(
        voter.as_ref().map(|u| u.id),
        link_id.map(LinkId::new),
        &ctx.db_pool,
    )
    .await
    .map_err(|e| {
        warn!(error = %e, "Vote rejected");
        e
    })?;
    let user = voter.ok_or(VoteError::AnonymousVoter)?;

    Ok(CreateVote {
        user: UserType::from(user),
        link: LinkType::from(link),
    })
}
