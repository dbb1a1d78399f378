use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::error::ApiError;

pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized - invalid token";

/// Shared secret every protected request must present.
#[derive(Clone)]
pub struct AuthState {
    token: Arc<str>,
}

impl AuthState {
    pub fn new(token: impl Into<Arc<str>>) -> Self {
        Self { token: token.into() }
    }
}

/// Token authentication middleware. Aborts with 401 before the handler runs
/// unless the `Authorization` credential equals the configured token exactly.
pub async fn require_token(
    State(auth): State<AuthState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let rejection = match extract_token(request.headers()) {
        Some(token) if token == &*auth.token => None,
        Some(_) => Some("token mismatch"),
        None => Some("no token provided"),
    };

    // The supplied credential is never logged.
    if let Some(reason) = rejection {
        tracing::warn!(path = %request.uri().path(), "Unauthorized request: {}", reason);
        return Err(ApiError::unauthorized(UNAUTHORIZED_MESSAGE));
    }

    Ok(next.run(request).await)
}

/// The whole Authorization header value. Absent, empty or non-ASCII headers count as no token.
fn extract_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    if value.is_empty() {
        return None;
    }
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::StatusCode, middleware, routing::get, Router};
    use tower::ServiceExt;

    fn app() -> Router {
        app_with_token("test-token")
    }

    fn app_with_token(token: &str) -> Router {
        Router::new()
            .route("/ping", get(|| async { "pong" }))
            .route_layer(middleware::from_fn_with_state(AuthState::new(token), require_token))
    }

    async fn status_for(authorization: Option<&str>) -> StatusCode {
        status_with_token("test-token", authorization).await
    }

    async fn status_with_token(token: &str, authorization: Option<&str>) -> StatusCode {
        let mut request = axum::http::Request::builder().uri("/ping");
        if let Some(value) = authorization {
            request = request.header(header::AUTHORIZATION, value);
        }
        let response = app_with_token(token)
            .oneshot(request.body(Body::empty()).unwrap())
            .await
            .unwrap();
        response.status()
    }

    #[tokio::test]
    async fn valid_token_passes() {
        assert_eq!(status_for(Some("test-token")).await, StatusCode::OK);
    }

    #[tokio::test]
    async fn bearer_prefix_is_not_stripped() {
        assert_eq!(status_for(Some("Bearer test-token")).await, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn token_containing_bearer_matches_whole_header() {
        assert_eq!(status_with_token("Bearer abc", Some("Bearer abc")).await, StatusCode::OK);
        assert_eq!(status_with_token("Bearer abc", Some("abc")).await, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn invalid_token_is_rejected() {
        assert_eq!(status_for(Some("wrong-token")).await, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn missing_token_is_rejected() {
        assert_eq!(status_for(None).await, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn comparison_is_exact() {
        assert_eq!(status_for(Some("test-token ")).await, StatusCode::UNAUTHORIZED);
        assert_eq!(status_for(Some("TEST-TOKEN")).await, StatusCode::UNAUTHORIZED);
        assert_eq!(status_for(Some("")).await, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn rejection_body_is_generic() {
        let response = app()
            .oneshot(axum::http::Request::builder().uri("/ping").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value, serde_json::json!({ "error": UNAUTHORIZED_MESSAGE }));
    }
}
