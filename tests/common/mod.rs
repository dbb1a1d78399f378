#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::task::JoinHandle;

use library_api::config::AppConfig;
use library_api::database::{Book, BookRepository, MemoryBookRepository, NewBook, RepositoryResult};
use library_api::router;
use library_api::state::AppState;

pub const TOKEN: &str = "integration-token";

/// In-memory store that records how many storage calls were made.
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

/// The production router on a free local port, backed by a fresh counting store.
pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    pub books: Arc<CountingRepository>,
    handle: JoinHandle<()>,
}

impl TestServer {
    pub async fn spawn() -> Result<Self> {
        // Pick an unused port for isolation
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        let mut config = AppConfig::default();
        config.security.api_token = TOKEN.to_string();
        config.server.port = port;

        let books = Arc::new(CountingRepository::default());
        let app = router::app(AppState::new(books.clone(), config));

        let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
            .await
            .with_context(|| format!("failed to bind port {}", port))?;

        let handle = tokio::spawn(async move {
            let service = app.into_make_service_with_connect_info::<SocketAddr>();
            if let Err(e) = axum::serve(listener, service).await {
                eprintln!("test server stopped: {}", e);
            }
        });

        Ok(Self { port, base_url, books, handle })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
