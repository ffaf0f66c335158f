//! Book record model.
//!
//! # Invariants
//! - Equality is structural over `id`, `title` and `author_name`.
//! - Records are plain values; repositories hand ownership to the caller.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Primary key of a row in the `books` table.
pub type BookId = i64;

/// One row of the `books` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookStore {
    pub id: BookId,
    pub title: String,
    pub author_name: String,
}

impl BookStore {
    pub fn new(id: BookId, title: impl Into<String>, author_name: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            author_name: author_name.into(),
        }
    }
}

impl Display for BookStore {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{} {} by {}", self.id, self.title, self.author_name)
    }
}
