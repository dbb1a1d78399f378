// handlers/books/create.rs - POST /books handler

use axum::extract::State;

use crate::database::Book;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

use super::extract::BookBody;
use super::utils::storage_error;

/**
 * POST /books - add a book to the collection
 *
 * Expected Input:
 * ```json
 * { "title": "string", "author": "string", "published_at": "string" }
 * ```
 *
 * An `id` in the body is ignored. Responds 201 with the stored book,
 * including the id storage assigned.
 */
pub async fn create_book(State(state): State<AppState>, BookBody(input): BookBody) -> ApiResult<Book> {
    tracing::info!("Creating a new book");

    let book = state
        .books
        .create(input)
        .await
        .map_err(|e| storage_error("creating book", e))?;

    tracing::info!(book_id = book.id, "Created book");
    Ok(ApiResponse::created(book))
}
