pub mod create;
pub mod delete;
pub mod extract;
pub mod get;
pub mod list;
pub mod update;
pub mod utils;

// Re-export handler functions for use in routing
pub use create::create_book;
pub use delete::delete_book;
pub use get::get_book;
pub use list::list_books;
pub use update::update_book;
