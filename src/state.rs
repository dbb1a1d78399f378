use std::sync::Arc;

use crate::config::AppConfig;
use crate::database::BookRepository;

/// Shared by every request. The store is injected here so any backend (or a
/// test double) can sit behind the handlers.
#[derive(Clone)]
pub struct AppState {
    pub books: Arc<dyn BookRepository>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(books: Arc<dyn BookRepository>, config: AppConfig) -> Self {
        Self {
            books,
            config: Arc::new(config),
        }
    }
}
