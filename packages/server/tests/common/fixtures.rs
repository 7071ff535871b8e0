//! Test fixtures for creating test data.
//!
//! These fixtures use the model methods directly to create test data.

use anyhow::Result;
use hackernews_core::domains::links::models::{Link, NewLink, Vote};
use hackernews_core::domains::users::actions::register_user;
use hackernews_core::domains::users::User;
use sqlx::PgPool;
use uuid::Uuid;

pub const TEST_PASSWORD: &str = "correct-horse-battery";

/// A value unique to this test run, so parallel tests sharing the database
/// never collide.
pub fn unique(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4().simple())
}

/// Create a user whose password is `TEST_PASSWORD`
pub async fn create_test_user(pool: &PgPool, username_prefix: &str) -> Result<User> {
    let username = unique(username_prefix);
    let email = format!("{}@example.com", username);
    register_user(&username, &email, TEST_PASSWORD, pool).await
}

pub async fn create_test_link(pool: &PgPool, url: &str, description: &str) -> Result<Link> {
    Link::create(
        NewLink::builder()
            .url(url)
            .description(description)
            .build(),
        pool,
    )
    .await
}

pub async fn create_test_vote(pool: &PgPool, user: &User, link: &Link) -> Result<Vote> {
    Vote::create(user.id, link.id, pool).await
}

pub async fn count_votes_for(pool: &PgPool, link: &Link) -> Result<i64> {
    Vote::count_for_link(link.id, pool).await
}
