// handlers/mod.rs - request handlers
//
// Public:    /health
// Protected: /books, /books/:id (token required, see middleware::auth)

pub mod books;
pub mod health;

pub use health::{health, route_not_found};
