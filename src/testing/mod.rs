//! Test utilities shared by the unit test modules.

use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tracing::subscriber::DefaultGuard;

use crate::database::{
    Book, BookRepository, MemoryBookRepository, NewBook, RepositoryError, RepositoryResult,
};

/// Memory store that counts how often it is reached.
#[derive(Default)]
pub struct CountingRepository {
    inner: MemoryBookRepository,
    calls: AtomicUsize,
}

impl CountingRepository {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn hit(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl BookRepository for CountingRepository {
    async fn list(&self) -> RepositoryResult<Vec<Book>> {
        self.hit();
        self.inner.list().await
    }
    async fn get(&self, id: i64) -> RepositoryResult<Book> {
        self.hit();
        self.inner.get(id).await
    }
    async fn create(&self, book: NewBook) -> RepositoryResult<Book> {
        self.hit();
        self.inner.create(book).await
    }
    async fn update(&self, book: &Book) -> RepositoryResult<u64> {
        self.hit();
        self.inner.update(book).await
    }
    async fn delete(&self, id: i64) -> RepositoryResult<u64> {
        self.hit();
        self.inner.delete(id).await
    }
}

/// Every operation fails as if the database went away.
pub struct FailingRepository;

#[async_trait]
impl BookRepository for FailingRepository {
    async fn list(&self) -> RepositoryResult<Vec<Book>> {
        Err(RepositoryError::Backend("database is down".into()))
    }
    async fn get(&self, _id: i64) -> RepositoryResult<Book> {
        Err(RepositoryError::Backend("database is down".into()))
    }
    async fn create(&self, _book: NewBook) -> RepositoryResult<Book> {
        Err(RepositoryError::Backend("database is down".into()))
    }
    async fn update(&self, _book: &Book) -> RepositoryResult<u64> {
        Err(RepositoryError::Backend("database is down".into()))
    }
    async fn delete(&self, _id: i64) -> RepositoryResult<u64> {
        Err(RepositoryError::Backend("database is down".into()))
    }
}

/// Collects formatted log output for assertions.
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Route this thread's log output into a buffer until the guard drops.
///
/// Use with `#[tokio::test]` (current-thread runtime) so every log line lands here.
pub fn capture_logs() -> (CapturedLogs, DefaultGuard) {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();
    (logs, tracing::subscriber::set_default(subscriber))
}
