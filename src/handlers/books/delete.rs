// handlers/books/delete.rs - DELETE /books/:id handler

use axum::extract::State;
use serde_json::{json, Value};

use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

use super::extract::BookId;
use super::utils::{nothing_affected, storage_error};

/// DELETE /books/:id - remove a book; a second delete of the same id is a 404
pub async fn delete_book(State(state): State<AppState>, BookId(id): BookId) -> ApiResult<Value> {
    tracing::info!(book_id = id, "Attempting to delete book with ID {}", id);

    let affected = state
        .books
        .delete(id)
        .await
        .map_err(|e| storage_error("deleting book", e))?;
    if affected == 0 {
        return Err(nothing_affected(id));
    }

    Ok(ApiResponse::success(json!({ "message": "Book deleted" })))
}
