use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::common::{trim_results, LinkId, PaginationDirection, UserId, ValidatedPaginationArgs, VoteId};

/// Vote model - one user's endorsement of one link.
///
/// Repeated votes by the same user on the same link are separate rows.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct Vote {
    pub id: VoteId,
    pub user_id: UserId,
    pub link_id: LinkId,
    pub created_at: DateTime<Utc>,
}

impl Vote {
    pub async fn find_by_id(id: VoteId, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM votes WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    pub async fn find_all(pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM votes ORDER BY id ASC")
            .fetch_all(pool)
            .await
            .map_err(Into::into)
    }

    pub async fn find_by_user(user_id: UserId, pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM votes WHERE user_id = $1 ORDER BY id ASC")
            .bind(user_id)
            .fetch_all(pool)
            .await
            .map_err(Into::into)
    }

    /// Batch-load votes for multiple links (for DataLoader)
    pub async fn find_for_link_ids(link_ids: &[LinkId], pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM votes WHERE link_id = ANY($1) ORDER BY id ASC")
            .bind(link_ids)
            .fetch_all(pool)
            .await
            .map_err(Into::into)
    }

    /// Votes on one link with cursor-based pagination (Relay spec)
    pub async fn find_paginated_for_link(
        link_id: LinkId,
        args: &ValidatedPaginationArgs,
        pool: &PgPool,
    ) -> Result<(Vec<Self>, bool)> {
        let query = match args.direction {
            PaginationDirection::Forward => {
                r#"
                SELECT * FROM votes
                WHERE link_id = $1
                  AND ($2::int IS NULL OR id > $2)
                ORDER BY id ASC
                LIMIT $3
                "#
            }
            PaginationDirection::Backward => {
                r#"
                SELECT * FROM votes
                WHERE link_id = $1
                  AND ($2::int IS NULL OR id < $2)
                ORDER BY id DESC
                LIMIT $3
                "#
            }
        };

        let rows = sqlx::query_as::<_, Self>(query)
            .bind(link_id)
            .bind(args.cursor)
            .bind(args.fetch_limit())
            .fetch_all(pool)
            .await?;

        let (mut results, has_more) = trim_results(rows, args.limit);
        if args.is_backward() {
            results.reverse();
        }

        Ok((results, has_more))
    }

    pub async fn count_for_link(link_id: LinkId, pool: &PgPool) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM votes WHERE link_id = $1")
            .bind(link_id)
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    pub async fn create(user_id: UserId, link_id: LinkId, pool: &PgPool) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO votes (user_id, link_id)
             VALUES ($1, $2)
             RETURNING *",
        )
        .bind(user_id)
        .bind(link_id)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }
}
