pub mod manager;
pub mod memory;
pub mod models;
pub mod postgres;
pub mod repository;

pub use manager::{DatabaseError, DatabaseManager};
pub use memory::MemoryBookRepository;
pub use models::{Book, NewBook};
pub use postgres::PgBookRepository;
pub use repository::{BookRepository, RepositoryError, RepositoryResult};
