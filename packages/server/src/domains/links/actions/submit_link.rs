use anyhow::Result;
use sqlx::PgPool;
use tracing::info;

use crate::common::UserId;
use crate::domains::links::models::{validate_url, Link, NewLink};

/// Validate and store a submitted link.
///
/// `posted_by` is `None` for anonymous submissions.
pub async fn submit_link(
    url: &str,
    description: Option<String>,
    posted_by: Option<UserId>,
    pool: &PgPool,
) -> Result<Link> {
    let url = validate_url(url)?;

    let new_link = NewLink::builder()
        .url(url)
        .description(description.unwrap_or_default())
        .posted_by(posted_by)
        .build();

    let link = Link::create(new_link, pool).await?;

    info!(
        link_id = %link.id,
        posted_by = ?link.posted_by_id,
        "Link submitted"
    );

    Ok(link)
}
