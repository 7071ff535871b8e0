use juniper::FieldResult;
use tracing::info;

use crate::domains::links::data::{LinkType, VoteType};
use crate::domains::links::errors::LinkError;
use crate::domains::links::models::{Link, Vote};
use crate::server::graphql::context::GraphQLContext;

fn non_negative(value: Option<i32>, name: &'static str) -> Result<Option<i64>, LinkError> {
    match value {
        Some(v) if v < 0 => Err(LinkError::NegativeArgument(name)),
        other => Ok(other.map(i64::from)),
    }
}

/// List links, optionally narrowed by a search term matched against url and description
pub async fn get_links(
    search: Option<String>,
    first: Option<i32>,
    skip: Option<i32>,
    ctx: &GraphQLContext,
) -> FieldResult<Vec<LinkType>> {
    info!(search = ?search, first = ?first, skip = ?skip, "get_links query called");

    let first = non_negative(first, "first")?;
    let skip = non_negative(skip, "skip")?;

    let links = Link::search(search.as_deref(), first, skip, &ctx.db_pool).await?;

    Ok(links.into_iter().map(LinkType::from).collect())
}

pub async fn get_votes(ctx: &GraphQLContext) -> FieldResult<Vec<VoteType>> {
    info!("get_votes query called");

    let votes = Vote::find_all(&ctx.db_pool).await?;

    Ok(votes.into_iter().map(VoteType::from).collect())
}
