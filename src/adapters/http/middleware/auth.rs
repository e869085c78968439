//! Authentication middleware and extractors for axum.
//!
//! - `auth_middleware` validates Bearer tokens and injects the user into extensions
//! - `RequireAuth` rejects requests without an authenticated user
//!
//! The middleware only talks to the `SessionValidator` port, so the JWT
//! validator and the test mock plug in the same way.
//!
//! ```text
//! Request → auth_middleware → injects AuthenticatedUser into extensions
//!                                      ↓
//!                              Handler → RequireAuth extractor reads from extensions
//! ```

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::domain::foundation::{AuthenticatedUser, AuthError};
use crate::ports::SessionValidator;

/// Auth middleware state - wraps the session validator.
pub type AuthState = Arc<dyn SessionValidator>;

/// Authentication middleware that validates Bearer tokens.
///
/// A missing token passes through unauthenticated; an invalid or expired one
/// is answered with 401 before the handler runs.
pub async fn auth_middleware(
    State(validator): State<AuthState>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(bearer_token);

    let Some(token) = token else {
        // Handlers enforce authentication through RequireAuth
        return next.run(request).await;
    };

    match validator.validate(token).await {
        Ok(user) => {
            tracing::debug!(user_id = %user.id, "request authenticated");
            request.extensions_mut().insert(user);
            next.run(request).await
        }
        Err(e) => auth_error_response(&e),
    }
}

/// Token after the `Bearer ` scheme, if non-empty.
fn bearer_token(header: &str) -> Option<&str> {
    header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

fn auth_error_response(error: &AuthError) -> Response {
    let (status, message) = match error {
        AuthError::TokenExpired => (StatusCode::UNAUTHORIZED, "Token expired"),
        AuthError::InvalidToken => (StatusCode::UNAUTHORIZED, "Invalid token"),
        AuthError::MissingSubject => (StatusCode::UNAUTHORIZED, "Token does not identify a user"),
    };

    (
        status,
        Json(serde_json::json!({
            "error": message,
            "code": "AUTH_ERROR"
        })),
    )
        .into_response()
}

/// Extractor that requires authentication.
///
/// Use this extractor in handlers that require an authenticated user.
/// If no user is in the request extensions (i.e., auth middleware didn't
/// successfully validate a token), returns 401 Unauthorized.
///
/// ```ignore
/// async fn my_handler(RequireAuth(user): RequireAuth) -> impl IntoResponse {
///     format!("owner {}", user.id)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RequireAuth(pub AuthenticatedUser);

impl<S> axum::extract::FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut axum::http::request::Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            parts
                .extensions
                .get::<AuthenticatedUser>()
                .cloned()
                .map(RequireAuth)
                .ok_or(AuthRejection::Unauthenticated)
        })
    }
}

/// Rejection type for authentication failures.
#[derive(Debug, Clone)]
pub enum AuthRejection {
    /// No valid authentication token was provided.
    Unauthenticated,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AuthRejection::Unauthenticated => {
                (StatusCode::UNAUTHORIZED, "Authentication required")
            }
        };

        (
            status,
            Json(serde_json::json!({
                "error": message,
                "code": "UNAUTHENTICATED"
            })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::auth::MockSessionValidator;
    use crate::domain::foundation::UserId;

    fn test_user() -> AuthenticatedUser {
        AuthenticatedUser::new(
            UserId::new(42).unwrap(),
            Some("test@example.com".to_string()),
        )
    }

    // ════════════════════════════════════════════════════════════════════════════
    // SessionValidator Tests (indirect via MockSessionValidator)
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn validator_returns_user_for_valid_token() {
        let validator: Arc<dyn SessionValidator> = Arc::new(
            MockSessionValidator::new().with_user("valid-token", test_user()),
        );

        let result = validator.validate("valid-token").await;
        assert!(result.is_ok());
        assert_eq!(result.unwrap().id.as_i64(), 42);
    }

    #[tokio::test]
    async fn validator_returns_error_for_invalid_token() {
        let validator: Arc<dyn SessionValidator> = Arc::new(MockSessionValidator::new());

        let result = validator.validate("invalid-token").await;
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    // ════════════════════════════════════════════════════════════════════════════
    // RequireAuth Extractor Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn require_auth_extracts_user_from_extensions() {
        use axum::extract::FromRequestParts;
        use axum::http::Request;

        // Create a request with AuthenticatedUser in extensions
        let mut request: Request<()> = Request::builder()
            .uri("/test")
            .body(())
            .unwrap();
        request.extensions_mut().insert(test_user());

        // Split into parts
        let (mut parts, _body) = request.into_parts();

        // Extract using RequireAuth
        let result: Result<RequireAuth, AuthRejection> =
            RequireAuth::from_request_parts(&mut parts, &()).await;

        assert!(result.is_ok());
        let RequireAuth(user) = result.unwrap();
        assert_eq!(user.id.as_i64(), 42);
    }

    #[tokio::test]
    async fn require_auth_fails_without_user() {
        use axum::extract::FromRequestParts;
        use axum::http::Request;

        // Create a request WITHOUT AuthenticatedUser
        let request: Request<()> = Request::builder()
            .uri("/test")
            .body(())
            .unwrap();

        let (mut parts, _body) = request.into_parts();

        let result: Result<RequireAuth, AuthRejection> =
            RequireAuth::from_request_parts(&mut parts, &()).await;

        assert!(matches!(result, Err(AuthRejection::Unauthenticated)));
    }

    // ════════════════════════════════════════════════════════════════════════════
    // AuthRejection Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn auth_rejection_returns_401() {
        let rejection = AuthRejection::Unauthenticated;
        let response = rejection.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Token Extraction Helper Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn bearer_token_extraction() {
        assert_eq!(bearer_token("Bearer my-secret-token"), Some("my-secret-token"));
        assert_eq!(bearer_token("my-secret-token"), None);
        assert_eq!(bearer_token("Basic dXNlcjpwYXNz"), None);
        assert_eq!(bearer_token("Bearer   "), None);
    }

    #[test]
    fn auth_errors_map_to_status_codes() {
        assert_eq!(
            auth_error_response(&AuthError::TokenExpired).status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            auth_error_response(&AuthError::MissingSubject).status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            auth_error_response(&AuthError::InvalidToken).status(),
            StatusCode::UNAUTHORIZED
        );
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Type Safety Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn auth_state_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AuthState>();
    }

    #[test]
    fn require_auth_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RequireAuth>();
    }
}
