use async_trait::async_trait;
use sqlx::PgPool;

use crate::database::models::{Book, NewBook};
use crate::database::repository::{BookRepository, RepositoryError, RepositoryResult};

/// `books` table access over a shared connection pool.
#[derive(Clone)]
pub struct PgBookRepository {
    pool: PgPool,
}

impl PgBookRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookRepository for PgBookRepository {
    async fn list(&self) -> RepositoryResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>("SELECT id, title, author, published_at FROM books")
            .fetch_all(&self.pool)
            .await?;
        Ok(books)
    }

    async fn get(&self, id: i64) -> RepositoryResult<Book> {
        match sqlx::query_as::<_, Book>(
            "SELECT id, title, author, published_at FROM books WHERE id = $1",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await
        {
            Ok(book) => Ok(book),
            Err(sqlx::Error::RowNotFound) => Err(RepositoryError::NotFound { id }),
            Err(other) => Err(other.into()),
        }
    }

    async fn create(&self, book: NewBook) -> RepositoryResult<Book> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO books (title, author, published_at) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(&book.title)
        .bind(&book.author)
        .bind(&book.published_at)
        .fetch_one(&self.pool)
        .await?;
        Ok(book.with_id(id))
    }

    async fn update(&self, book: &Book) -> RepositoryResult<u64> {
        let result = sqlx::query(
            "UPDATE books SET title = $1, author = $2, published_at = $3 WHERE id = $4",
        )
        .bind(&book.title)
        .bind(&book.author)
        .bind(&book.published_at)
        .bind(book.id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i64) -> RepositoryResult<u64> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
