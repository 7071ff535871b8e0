//! GraphQL client for integration testing.
//!
//! Executes GraphQL queries directly against the schema without HTTP overhead.

use hackernews_core::common::UserId;
use hackernews_core::domains::auth::JwtService;
use hackernews_core::server::graphql::{create_schema, GraphQLContext, Schema};
use hackernews_core::server::middleware::AuthUser;
use juniper::Variables;
use serde_json::Value;
use sqlx::PgPool;
use std::sync::Arc;

pub const TEST_JWT_SECRET: &str = "test_secret_key";
pub const TEST_JWT_ISSUER: &str = "test_issuer";

pub fn test_jwt_service() -> Arc<JwtService> {
    Arc::new(JwtService::new(TEST_JWT_SECRET, TEST_JWT_ISSUER.to_string()))
}

/// GraphQL client for executing queries and mutations in tests.
pub struct GraphQLClient {
    schema: Schema,
    context: GraphQLContext,
}

/// Result of a GraphQL execution.
#[derive(Debug)]
pub struct GraphQLResult {
    pub data: Option<Value>,
    pub errors: Vec<String>,
}

impl GraphQLResult {
    /// Returns true if the execution had no errors.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Unwraps the data, panicking if there were errors.
    pub fn unwrap(self) -> Value {
        if !self.errors.is_empty() {
            panic!("GraphQL errors: {:?}", self.errors);
        }
        self.data.expect("No data returned")
    }

    /// Gets a value at the given JSON path.
    ///
    /// ```ignore
    /// let url = result.get("createLink.url");
    /// ```
    pub fn get(&self, path: &str) -> Value {
        let data = self.data.as_ref().expect("No data returned");
        let mut current = data;
        for key in path.split('.') {
            current = &current[key];
        }
        current.clone()
    }

    /// True if any error message equals `message`.
    pub fn has_error(&self, message: &str) -> bool {
        self.errors.iter().any(|e| e == message)
    }
}

impl GraphQLClient {
    /// Anonymous client.
    pub fn new(db_pool: PgPool) -> Self {
        Self::with_context(GraphQLContext::new(db_pool, None, test_jwt_service()))
    }

    /// Client whose requests carry the given user's identity.
    pub fn with_auth_user(db_pool: PgPool, user_id: UserId, username: &str) -> Self {
        let auth_user = AuthUser {
            user_id,
            username: username.to_string(),
        };
        Self::with_context(GraphQLContext::new(
            db_pool,
            Some(auth_user),
            test_jwt_service(),
        ))
    }

    pub fn with_context(context: GraphQLContext) -> Self {
        Self {
            schema: create_schema(),
            context,
        }
    }

    /// Execute a GraphQL query/mutation.
    pub async fn execute(&self, query: &str) -> GraphQLResult {
        self.execute_with_vars(query, Variables::new()).await
    }

    /// Execute a GraphQL query/mutation with variables.
    pub async fn execute_with_vars(&self, query: &str, variables: Variables) -> GraphQLResult {
        let (result, errors) =
            juniper::execute(query, None, &self.schema, &variables, &self.context)
                .await
                .expect("GraphQL execution failed");

        let data = Some(serde_json::to_value(&result).expect("Failed to serialize GraphQL result"));

        let error_messages: Vec<String> = errors
            .iter()
            .map(|e| e.error().message().to_string())
            .collect();

        GraphQLResult {
            data,
            errors: error_messages,
        }
    }

    /// Execute a query and expect success, returning the data.
    pub async fn query(&self, query: &str) -> Value {
        self.execute(query).await.unwrap()
    }

    /// Execute a query with variables and expect success.
    pub async fn query_with_vars(&self, query: &str, variables: Variables) -> Value {
        self.execute_with_vars(query, variables).await.unwrap()
    }
}
