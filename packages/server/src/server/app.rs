//! Application setup and server configuration.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    extract::{Extension, Request},
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor, GovernorLayer,
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::{Config, RateLimit};
use crate::domains::auth::JwtService;
use crate::server::graphql::{create_schema, GraphQLContext};
use crate::server::middleware::{jwt_auth_middleware, AuthUser};
use crate::server::routes::{graphql_batch_handler, graphql_handler, health_handler};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub jwt_service: Arc<JwtService>,
}

/// Middleware to create GraphQLContext per-request
async fn create_graphql_context(
    Extension(state): Extension<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    // Populated by jwt_auth_middleware when a valid token was sent
    let auth_user = request.extensions().get::<AuthUser>().cloned();

    let context = GraphQLContext::new(state.db_pool.clone(), auth_user, state.jwt_service.clone());
    request.extensions_mut().insert(context);

    next.run(request).await
}

fn cors_layer(allowed_origins: &[String]) -> Result<CorsLayer> {
    let origin = if allowed_origins.is_empty() {
        AllowOrigin::any()
    } else {
        let origins = allowed_origins
            .iter()
            .map(|o| {
                HeaderValue::from_str(o).with_context(|| format!("Invalid CORS origin: {}", o))
            })
            .collect::<Result<Vec<_>>>()?;
        AllowOrigin::list(origins)
    };

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]))
}

/// Interval after which the governor refills one request slot.
fn replenish_interval_ms(rate_limit: RateLimit) -> Result<u64> {
    anyhow::ensure!(
        rate_limit.per_second > 0,
        "RATE_LIMIT_PER_SECOND must be positive"
    );
    Ok((1000 / rate_limit.per_second).max(1))
}

/// Build the Axum application router
pub fn build_app(pool: PgPool, config: &Config) -> Result<Router> {
    let schema = Arc::new(create_schema());

    let jwt_service = Arc::new(JwtService::new(
        &config.jwt_secret,
        config.jwt_issuer.clone(),
    ));

    let app_state = AppState {
        db_pool: pool,
        jwt_service: jwt_service.clone(),
    };

    let cors = cors_layer(&config.allowed_origins)?;

    let mut router = Router::new()
        .route("/graphql", post(graphql_handler))
        .route("/graphql/batch", post(graphql_batch_handler));

    // GraphiQL only in debug builds (development)
    #[cfg(debug_assertions)]
    {
        router = router.route("/graphiql", get(juniper_axum::graphiql("/graphql", None)));
    }

    // Middleware layers (applied in reverse order - last added runs first)
    let mut router = router
        .route("/health", get(health_handler))
        .layer(middleware::from_fn(create_graphql_context))
        .layer(middleware::from_fn(move |req, next| {
            jwt_auth_middleware(jwt_service.clone(), req, next)
        }));

    // Rate limiting per client IP: X-Forwarded-For / X-Real-IP / Forwarded,
    // falling back to the peer address
    if let Some(rate_limit) = config.rate_limit {
        let governor_config = GovernorConfigBuilder::default()
            .per_millisecond(replenish_interval_ms(rate_limit)?)
            .burst_size(rate_limit.burst_size)
            .key_extractor(SmartIpKeyExtractor)
            .use_headers()
            .finish()
            .context("Invalid rate limit configuration")?;

        router = router.layer(GovernorLayer {
            config: Arc::new(governor_config),
        });
    }

    let app = router
        .layer(Extension(app_state)) // Must wrap every middleware that reads AppState
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(schema);

    Ok(app)
}
