// handlers/books/update.rs - PUT /books/:id handler

use axum::extract::State;

use crate::database::Book;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

use super::extract::{BookBody, BookId};
use super::utils::{nothing_affected, storage_error};

/// PUT /books/:id - overwrite a book's fields
///
/// The path id wins over any id in the body. The submitted book is echoed back
/// as stored, without a second read.
pub async fn update_book(
    State(state): State<AppState>,
    BookId(id): BookId,
    BookBody(input): BookBody,
) -> ApiResult<Book> {
    tracing::info!(book_id = id, "Updating book with ID {}", id);

    let book = input.with_id(id);

    let affected = state
        .books
        .update(&book)
        .await
        .map_err(|e| storage_error("updating book", e))?;
    if affected == 0 {
        return Err(nothing_affected(id));
    }

    Ok(ApiResponse::success(book))
}
