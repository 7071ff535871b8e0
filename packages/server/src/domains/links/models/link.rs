use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use typed_builder::TypedBuilder;

use crate::common::{trim_results, LinkId, PaginationDirection, UserId, ValidatedPaginationArgs};
use crate::domains::links::errors::LinkError;

/// Schemes accepted for submitted links
const ALLOWED_SCHEMES: &[&str] = &["http", "https", "ftp", "ftps"];

/// Link model - SQL persistence layer
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct Link {
    pub id: LinkId,
    pub url: String,
    pub description: String,
    pub posted_by_id: Option<UserId>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, TypedBuilder)]
#[builder(field_defaults(setter(into)))]
pub struct NewLink {
    pub url: String,
    #[builder(default)]
    pub description: String,
    #[builder(default)]
    pub posted_by: Option<UserId>,
}

/// Exact-match filters for the relay link connection
#[derive(Debug, Clone, Default)]
pub struct LinkFilter {
    pub url: Option<String>,
    pub description: Option<String>,
}

/// Check that a submitted URL is absolute with a web/ftp scheme and a host.
///
/// Returns the trimmed URL as given (not re-serialized).
pub fn validate_url(raw: &str) -> Result<String, LinkError> {
    let trimmed = raw.trim();
    let parsed = url::Url::parse(trimmed).map_err(|_| LinkError::InvalidUrl(raw.to_string()))?;

    if !ALLOWED_SCHEMES.contains(&parsed.scheme()) || parsed.host_str().is_none() {
        return Err(LinkError::InvalidUrl(raw.to_string()));
    }

    Ok(trimmed.to_string())
}

/// Escape LIKE wildcards so the term matches literally.
pub fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

impl Link {
    pub async fn find_by_id(id: LinkId, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM links WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    /// Batch-load links (for DataLoader)
    pub async fn find_by_ids(ids: &[LinkId], pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM links WHERE id = ANY($1)")
            .bind(ids)
            .fetch_all(pool)
            .await
            .map_err(Into::into)
    }

    pub async fn find_by_poster(user_id: UserId, pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM links WHERE posted_by_id = $1 ORDER BY id ASC")
            .bind(user_id)
            .fetch_all(pool)
            .await
            .map_err(Into::into)
    }

    /// List links, optionally filtered by a case-insensitive substring match
    /// on url OR description.
    ///
    /// `skip` and `first` map to OFFSET and LIMIT; `None` leaves them unbounded.
    pub async fn search(
        search: Option<&str>,
        first: Option<i64>,
        skip: Option<i64>,
        pool: &PgPool,
    ) -> Result<Vec<Self>> {
        let pattern = search.map(|term| format!("%{}%", escape_like(term)));

        sqlx::query_as::<_, Self>(
            r#"
            SELECT * FROM links
            WHERE ($1::text IS NULL OR url ILIKE $1 OR description ILIKE $1)
            ORDER BY id ASC
            OFFSET $2
            LIMIT $3
            "#,
        )
        .bind(pattern)
        .bind(skip)
        .bind(first)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    /// Find links with cursor-based pagination (Relay spec)
    ///
    /// Fetches limit+1 to detect if there are more pages.
    pub async fn find_paginated(
        filter: &LinkFilter,
        args: &ValidatedPaginationArgs,
        pool: &PgPool,
    ) -> Result<(Vec<Self>, bool)> {
        let fetch_limit = args.fetch_limit();

        let rows = match args.direction {
            PaginationDirection::Forward => {
                sqlx::query_as::<_, Self>(
                    r#"
                    SELECT * FROM links
                    WHERE ($1::text IS NULL OR url = $1)
                      AND ($2::text IS NULL OR description = $2)
                      AND ($3::int IS NULL OR id > $3)
                    ORDER BY id ASC
                    LIMIT $4
                    "#,
                )
                .bind(filter.url.as_deref())
                .bind(filter.description.as_deref())
                .bind(args.cursor)
                .bind(fetch_limit)
                .fetch_all(pool)
                .await?
            }
            PaginationDirection::Backward => {
                sqlx::query_as::<_, Self>(
                    r#"
                    SELECT * FROM links
                    WHERE ($1::text IS NULL OR url = $1)
                      AND ($2::text IS NULL OR description = $2)
                      AND ($3::int IS NULL OR id < $3)
                    ORDER BY id DESC
                    LIMIT $4
                    "#,
                )
                .bind(filter.url.as_deref())
                .bind(filter.description.as_deref())
                .bind(args.cursor)
                .bind(fetch_limit)
                .fetch_all(pool)
                .await?
            }
        };

        // Trim in query order so the surplus row is always the farthest one
        let (mut results, has_more) = trim_results(rows, args.limit);
        if args.is_backward() {
            results.reverse();
        }

        Ok((results, has_more))
    }

    pub async fn count_filtered(filter: &LinkFilter, pool: &PgPool) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM links
            WHERE ($1::text IS NULL OR url = $1)
              AND ($2::text IS NULL OR description = $2)
            "#,
        )
        .bind(filter.url.as_deref())
        .bind(filter.description.as_deref())
        .fetch_one(pool)
        .await?;
        Ok(count)
    }

    pub async fn create(new_link: NewLink, pool: &PgPool) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO links (url, description, posted_by_id)
             VALUES ($1, $2, $3)
             RETURNING *",
        )
        .bind(&new_link.url)
        .bind(&new_link.description)
        .bind(new_link.posted_by)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url_accepts_web_urls() {
        assert_eq!(
            validate_url("  https://news.ycombinator.com/item?id=1 ").unwrap(),
            "https://news.ycombinator.com/item?id=1"
        );
        assert!(validate_url("http://localhost:8080").is_ok());
        assert!(validate_url("ftp://files.example.com/a.txt").is_ok());
    }

    #[test]
    fn test_validate_url_rejects_non_urls() {
        assert!(validate_url("not a url").is_err());
        assert!(validate_url("example.com").is_err());
        assert!(validate_url("mailto:someone@example.com").is_err());
        assert!(validate_url("javascript:alert(1)").is_err());
        assert!(validate_url("").is_err());
    }

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("graphql"), "graphql");
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("snake_case"), "snake\\_case");
        assert_eq!(escape_like("a\\b"), "a\\\\b");
    }

    #[test]
    fn test_new_link_builder_defaults() {
        let link = NewLink::builder().url("https://example.com").build();
        assert_eq!(link.description, "");
        assert!(link.posted_by.is_none());

        let link = NewLink::builder()
            .url("https://example.com")
            .description("An example")
            .posted_by(Some(UserId::new(3)))
            .build();
        assert_eq!(link.posted_by, Some(UserId::new(3)));
    }
}
