// handlers/books/get.rs - GET /books/:id handler

use axum::extract::State;

use crate::database::Book;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

use super::extract::BookId;
use super::utils::storage_error;

/// GET /books/:id - show a single book
pub async fn get_book(State(state): State<AppState>, BookId(id): BookId) -> ApiResult<Book> {
    tracing::info!(book_id = id, "Fetching book with ID {}", id);

    let book = state
        .books
        .get(id)
        .await
        .map_err(|e| storage_error("fetching book", e))?;
    Ok(ApiResponse::success(book))
}
