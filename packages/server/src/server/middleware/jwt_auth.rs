use crate::common::UserId;
use crate::domains::auth::JwtService;
use axum::{middleware::Next, response::Response};
use std::sync::Arc;
use tracing::debug;

/// Authenticated user information from JWT
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub user_id: UserId,
    pub username: String,
}

/// JWT authentication middleware
///
/// Extracts JWT token from Authorization header, verifies it, and adds AuthUser to request extensions.
/// If no token or invalid token, request continues without AuthUser (public access).
pub async fn jwt_auth_middleware(
    jwt_service: Arc<JwtService>,
    mut request: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let auth_user = extract_auth_user(&request, &jwt_service);

    if let Some(user) = auth_user {
        debug!("Authenticated user: {} ({})", user.username, user.user_id);
        request.extensions_mut().insert(user);
    } else {
        debug!("No valid authentication token");
    }

    next.run(request).await
}

/// Extract and verify JWT token from request
fn extract_auth_user(
    request: &axum::http::Request<axum::body::Body>,
    jwt_service: &JwtService,
) -> Option<AuthUser> {
    let auth_header = request.headers().get("authorization")?;
    let auth_str = auth_header.to_str().ok()?.trim();

    // "Bearer <token>", "JWT <token>" or a raw token
    let token = auth_str
        .strip_prefix("Bearer ")
        .or_else(|| auth_str.strip_prefix("JWT "))
        .unwrap_or(auth_str);

    let claims = jwt_service.verify_token(token).ok()?;

    Some(AuthUser {
        user_id: claims.user_id,
        username: claims.username,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> JwtService {
        JwtService::new("test_secret", "test_issuer".to_string())
    }

    fn request_with(header: Option<String>) -> axum::http::Request<axum::body::Body> {
        let mut builder = axum::http::Request::builder();
        if let Some(value) = header {
            builder = builder.header("authorization", value);
        }
        builder.body(axum::body::Body::empty()).unwrap()
    }

    #[test]
    fn test_extract_token_with_bearer() {
        let jwt_service = service();
        let token = jwt_service
            .create_token(UserId::new(7), "alice".to_string())
            .unwrap();

        let auth_user =
            extract_auth_user(&request_with(Some(format!("Bearer {}", token))), &jwt_service)
                .unwrap();
        assert_eq!(auth_user.user_id, UserId::new(7));
        assert_eq!(auth_user.username, "alice");
    }

    #[test]
    fn test_extract_token_with_jwt_prefix() {
        let jwt_service = service();
        let token = jwt_service
            .create_token(UserId::new(8), "bob".to_string())
            .unwrap();

        let auth_user =
            extract_auth_user(&request_with(Some(format!("JWT {}", token))), &jwt_service);
        assert_eq!(auth_user.unwrap().user_id, UserId::new(8));
    }

    #[test]
    fn test_extract_token_without_prefix() {
        let jwt_service = service();
        let token = jwt_service
            .create_token(UserId::new(9), "carol".to_string())
            .unwrap();

        let auth_user = extract_auth_user(&request_with(Some(token)), &jwt_service);
        assert_eq!(auth_user.unwrap().user_id, UserId::new(9));
    }

    #[test]
    fn test_no_auth_header() {
        assert!(extract_auth_user(&request_with(None), &service()).is_none());
    }

    #[test]
    fn test_invalid_token() {
        let auth_user = extract_auth_user(
            &request_with(Some("Bearer invalid_token".to_string())),
            &service(),
        );
        assert!(auth_user.is_none());
    }

    #[test]
    fn test_token_from_other_issuer() {
        let other = JwtService::new("test_secret", "someone_else".to_string());
        let token = other
            .create_token(UserId::new(1), "mallory".to_string())
            .unwrap();

        let auth_user = extract_auth_user(&request_with(Some(token)), &service());
        assert!(auth_user.is_none());
    }
}
