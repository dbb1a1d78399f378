use async_trait::async_trait;
use thiserror::Error;

use crate::database::models::{Book, NewBook};

/// Failures reported by a book store.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// No record with this id.
    #[error("book not found: {id}")]
    NotFound { id: i64 },

    /// Failure from a non-SQL backend.
    #[error("{0}")]
    Backend(String),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Storage contract for the book collection.
///
/// `update` and `delete` report how many records they touched instead of failing
/// on a missing id; a count of 0 means "nothing there" and the caller decides what
/// that means for the response.
#[async_trait]
pub trait BookRepository: Send + Sync + 'static {
    /// All books in the backend's natural order.
    async fn list(&self) -> RepositoryResult<Vec<Book>>;

    async fn get(&self, id: i64) -> RepositoryResult<Book>;

    /// Persist a new book and return it with its assigned id.
    async fn create(&self, book: NewBook) -> RepositoryResult<Book>;

    /// Overwrite title, author and published_at of `book.id`.
    async fn update(&self, book: &Book) -> RepositoryResult<u64>;

    async fn delete(&self, id: i64) -> RepositoryResult<u64>;
}
