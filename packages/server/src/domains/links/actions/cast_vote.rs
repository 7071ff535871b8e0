use anyhow::Result;
use sqlx::PgPool;
use tracing::info;

use crate::common::{LinkId, UserId};
use crate::domains::links::errors::VoteError;
use crate::domains::links::models::{Link, Vote};

const LINK_FK: &str = "votes_link_id_fkey";

/// Record a vote by `voter` on the link with `link_id`.
///
/// The voter is checked before the link, so an anonymous vote on a missing
/// link reports `AnonymousVoter`. Returns the vote and the link voted on.
pub async fn cast_vote(
    voter: Option<UserId>,
    link_id: Option<LinkId>,
    pool: &PgPool,
) -> Result<(Vote, Link)> {
    let voter = voter.ok_or(VoteError::AnonymousVoter)?;

    let link = match link_id {
        Some(id) => Link::find_by_id(id, pool).await?,
        None => None,
    }
    .ok_or(VoteError::InvalidLink)?;

    let vote = Vote::create(voter, link.id, pool)
        .await
        .map_err(|e| {
            // Link deleted between the lookup and the insert
            let link_gone = matches!(
                e.downcast_ref::<sqlx::Error>(),
                Some(sqlx::Error::Database(db)) if db.constraint() == Some(LINK_FK)
            );
            if link_gone {
                VoteError::InvalidLink.into()
            } else {
                e
            }
        })?;

    info!(vote_id = %vote.id, user_id = %voter, link_id = %link.id, "Vote cast");

    Ok((vote, link))
}
