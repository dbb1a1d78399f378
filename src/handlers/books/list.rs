// handlers/books/list.rs - GET /books handler

use axum::extract::State;

use crate::database::Book;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

use super::utils::storage_error;

/// GET /books - every book in the store, possibly none
pub async fn list_books(State(state): State<AppState>) -> ApiResult<Vec<Book>> {
    tracing::info!("Fetching all books");
    let books = state
        .books
        .list()
        .await
        .map_err(|e| storage_error("fetching books", e))?;
    Ok(ApiResponse::success(books))
}
