use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A persisted book. `id` is assigned by storage and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub published_at: String,
}

/// Client-supplied book fields. Any `id` in the request body is ignored;
/// create assigns one and update takes it from the path. Omitted fields are
/// stored as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    /// Free-form text, never parsed as a date.
    pub published_at: String,
}

impl NewBook {
    pub fn with_id(self, id: i64) -> Book {
        Book {
            id,
            title: self.title,
            author: self.author,
            published_at: self.published_at,
        }
    }
}
