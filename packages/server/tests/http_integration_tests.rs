//! End-to-end tests through the Axum router: JWT middleware, per-request
//! GraphQL context, rate limiting and the health route.

mod common;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use common::{create_test_link, create_test_user, unique, TestHarness};
use hackernews_core::domains::auth::JwtService;
use hackernews_core::server::build_app;
use hackernews_core::{Config, RateLimit};
use serde_json::{json, Value};
use test_context::test_context;
use tower::ServiceExt;

const SECRET: &str = "http-test-secret";
const ISSUER: &str = "http-test";

async fn test_app(ctx: &TestHarness) -> Router {
    app_with_rate_limit(ctx, None).await
}

async fn app_with_rate_limit(ctx: &TestHarness, rate_limit: Option<RateLimit>) -> Router {
    let config = Config {
        database_url: ctx.database_url().await,
        database_max_connections: 5,
        port: 0,
        jwt_secret: SECRET.to_string(),
        jwt_issuer: ISSUER.to_string(),
        allowed_origins: vec![],
        rate_limit,
    };
    build_app(ctx.db_pool.clone(), &config).expect("router should build")
}

async fn health_from(app: &Router, client_ip: &str) -> StatusCode {
    app.clone()
        .oneshot(
            Request::builder()
                .uri("/health")
                .header("x-forwarded-for", client_ip)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
        .status()
}

async fn post_graphql(app: Router, body: Value, authorization: Option<String>) -> (StatusCode, Value) {
    let mut request = Request::builder()
        .method("POST")
        .uri("/graphql")
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(value) = authorization {
        request = request.header(header::AUTHORIZATION, value);
    }

    let response = app
        .oneshot(request.body(Body::from(body.to_string())).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn vote_request(link_id: i32) -> Value {
    json!({
        "query": "mutation($linkId: Int) { createVote(linkId: $linkId) { user { username } } }",
        "variables": { "linkId": link_id },
    })
}

#[test_context(TestHarness)]
#[tokio::test]
async fn bearer_token_identifies_voter(ctx: &TestHarness) {
    let user = create_test_user(&ctx.db_pool, "http").await.unwrap();
    let link = create_test_link(
        &ctx.db_pool,
        &format!("https://example.com/{}", unique("http")),
        "",
    )
    .await
    .unwrap();
    let token = JwtService::new(SECRET, ISSUER.to_string())
        .create_token(user.id, user.username.clone())
        .unwrap();

    let (status, body) = post_graphql(
        test_app(ctx).await,
        vote_request(link.id.into_inner()),
        Some(format!("Bearer {}", token)),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["data"]["createVote"]["user"]["username"],
        user.username.as_str()
    );

    // The "JWT" prefix is accepted too
    let (_, body) = post_graphql(
        test_app(ctx).await,
        vote_request(link.id.into_inner()),
        Some(format!("JWT {}", token)),
    )
    .await;
    assert!(body.get("errors").is_none());
}

#[test_context(TestHarness)]
#[tokio::test]
async fn invalid_token_leaves_request_anonymous(ctx: &TestHarness) {
    let link = create_test_link(
        &ctx.db_pool,
        &format!("https://example.com/{}", unique("http-anon")),
        "",
    )
    .await
    .unwrap();

    let (status, body) = post_graphql(
        test_app(ctx).await,
        vote_request(link.id.into_inner()),
        Some("Bearer definitely-not-a-jwt".to_string()),
    )
    .await;

    // Resolver errors still produce a 200 with an errors array
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["errors"][0]["message"], "You must be logged in to vote");
}

#[test_context(TestHarness)]
#[tokio::test]
async fn malformed_query_is_bad_request(ctx: &TestHarness) {
    let (status, body) = post_graphql(
        test_app(ctx).await,
        json!({ "query": "query { links { " }),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["errors"].is_array());
}

#[test_context(TestHarness)]
#[tokio::test]
async fn health_reports_database(ctx: &TestHarness) {
    let response = test_app(ctx)
        .await
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"]["status"], "ok");
}

#[test_context(TestHarness)]
#[tokio::test]
async fn rate_limit_keys_on_forwarded_client_ip(ctx: &TestHarness) {
    let app = app_with_rate_limit(
        ctx,
        Some(RateLimit {
            per_second: 1,
            burst_size: 1,
        }),
    )
    .await;

    // oneshot requests carry no peer address, only the forwarding header
    assert_eq!(health_from(&app, "203.0.113.7").await, StatusCode::OK);
    assert_eq!(
        health_from(&app, "203.0.113.7").await,
        StatusCode::TOO_MANY_REQUESTS
    );

    // A different client has its own bucket
    assert_eq!(health_from(&app, "198.51.100.23").await, StatusCode::OK);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn rate_limited_router_serves_graphql(ctx: &TestHarness) {
    let app = app_with_rate_limit(ctx, Some(RateLimit::default())).await;

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/graphql")
                .header(header::CONTENT_TYPE, "application/json")
                .header("x-real-ip", "192.0.2.44")
                .body(Body::from(json!({ "query": "{ votes { id } }" }).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-ratelimit-remaining"));
}
