//! In-process book store, used by `--in-memory` runs and by tests.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::database::models::{Book, NewBook};
use crate::database::repository::{BookRepository, RepositoryError, RepositoryResult};

#[derive(Debug)]
struct MemoryState {
    books: BTreeMap<i64, Book>,
    /// `None` once `i64::MAX` has been handed out.
    next_id: Option<i64>,
}

/// Books keyed by id. Ids start at 1 and are never handed out twice, even after
/// the record holding them is deleted.
#[derive(Debug)]
pub struct MemoryBookRepository {
    state: RwLock<MemoryState>,
}

impl Default for MemoryBookRepository {
    fn default() -> Self {
        Self {
            state: RwLock::new(MemoryState {
                books: BTreeMap::new(),
                next_id: Some(1),
            }),
        }
    }
}

impl MemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with existing records. The id counter continues after the
    /// highest seeded id.
    pub fn with_books(books: impl IntoIterator<Item = Book>) -> Self {
        let books: BTreeMap<i64, Book> = books.into_iter().map(|b| (b.id, b)).collect();
        let next_id = books.keys().next_back().map_or(Some(1), |max| max.checked_add(1));
        Self {
            state: RwLock::new(MemoryState { books, next_id }),
        }
    }
}

#[async_trait]
impl BookRepository for MemoryBookRepository {
    async fn list(&self) -> RepositoryResult<Vec<Book>> {
        let state = self.state.read().await;
        Ok(state.books.values().cloned().collect())
    }

    async fn get(&self, id: i64) -> RepositoryResult<Book> {
        let state = self.state.read().await;
        state
            .books
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::NotFound { id })
    }

    async fn create(&self, book: NewBook) -> RepositoryResult<Book> {
        let mut state = self.state.write().await;
        let id = state
            .next_id
            .ok_or_else(|| RepositoryError::Backend("id space exhausted".to_string()))?;
        state.next_id = id.checked_add(1);
        let book = book.with_id(id);
        state.books.insert(id, book.clone());
        Ok(book)
    }

    async fn update(&self, book: &Book) -> RepositoryResult<u64> {
        let mut state = self.state.write().await;
        match state.books.get_mut(&book.id) {
            Some(existing) => {
                *existing = book.clone();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: i64) -> RepositoryResult<u64> {
        let mut state = self.state.write().await;
        Ok(state.books.remove(&id).map_or(0, |_| 1))
    }
}
