use crate::database::{NewBook, RepositoryError};
use crate::error::ApiError;

/// Parse the `{id}` path segment. In forgiving mode a malformed id becomes 0,
/// which no stored book has, so the request ends in a 404.
pub fn parse_book_id(raw: &str, strict: bool) -> Result<i64, ApiError> {
    match raw.parse::<i64>() {
        Ok(id) => Ok(id),
        Err(_) if strict => Err(ApiError::bad_request(format!("Invalid book id: {}", raw))),
        Err(_) => Ok(0),
    }
}

/// Decode a request body into book fields, surfacing the decoder's message on failure.
pub fn decode_book(body: &[u8]) -> Result<NewBook, ApiError> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::warn!("Invalid input: {}", e);
        ApiError::bad_request(e.to_string())
    })
}

/// Log a storage failure for `action` and convert it for the response.
pub fn storage_error(action: &str, err: RepositoryError) -> ApiError {
    match &err {
        RepositoryError::NotFound { id } => tracing::info!(book_id = *id, "Book not found while {}", action),
        other => tracing::error!("Error {}: {}", action, other),
    }
    err.into()
}

/// Log and build the 404 for an update or delete that touched nothing.
pub fn nothing_affected(id: i64) -> ApiError {
    tracing::info!(book_id = id, "Book with ID {} not found", id);
    ApiError::not_found(crate::error::BOOK_NOT_FOUND)
}
