// handlers/books/extract.rs - request extractors for the book routes
//
// Extraction failures are turned into `ApiError` so every response, including
// a rejected body or path, carries the `{"error": ...}` JSON shape.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::{request::Parts, StatusCode},
};

use crate::database::NewBook;
use crate::error::ApiError;
use crate::state::AppState;

use super::utils::{decode_book, parse_book_id};

/// Book fields decoded from the request body.
pub struct BookBody(pub NewBook);

#[async_trait]
impl<S> FromRequest<S> for BookBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = match Bytes::from_request(req, state).await {
            Ok(body) => body,
            Err(rejection) => {
                let message = rejection.body_text();
                tracing::warn!("Rejected request body: {}", message);
                // Body limit errors keep their 413
                return Err(if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                    ApiError::payload_too_large(message)
                } else {
                    ApiError::bad_request(message)
                });
            }
        };

        decode_book(&body).map(BookBody)
    }
}

/// The `:id` path segment as a book id.
///
/// A segment that cannot be read at all (for example invalid percent-encoded
/// UTF-8) is treated like any other malformed id.
pub struct BookId(pub i64);

#[async_trait]
impl FromRequestParts<AppState> for BookId {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let strict = state.config.api.strict_ids;
        match Path::<String>::from_request_parts(parts, state).await {
            Ok(Path(raw)) => parse_book_id(&raw, strict).map(BookId),
            Err(rejection) if strict => Err(ApiError::bad_request(format!(
                "Invalid book id: {}",
                rejection.body_text()
            ))),
            Err(rejection) => {
                tracing::debug!("Unreadable book id, using 0: {}", rejection.body_text());
                Ok(BookId(0))
            }
        }
    }
}
