//! Book repository over an injected connection.
//!
//! # Invariants
//! - `all()` returns one `BookStore` per row, in connection order.
//! - No writes, caching or filtering; every call re-runs the query.

use crate::model::book::BookStore;
use crate::repo::connection::{FromRow, QueryConnection, RepoResult};
use log::{debug, error};
use rusqlite::{Connection, Row};
use std::time::Instant;

const BOOKS_SELECT_SQL: &str = "SELECT * FROM books";

impl FromRow for BookStore {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            title: row.get("title")?,
            author_name: row.get("author_name")?,
        })
    }
}

/// Read-only repository for the `books` table.
pub struct BookStoreRepository<'conn, C: QueryConnection = Connection> {
    conn: &'conn C,
}

impl<'conn, C: QueryConnection> BookStoreRepository<'conn, C> {
    pub fn new(conn: &'conn C) -> Self {
        Self { conn }
    }

    /// Returns every book row, in the order the connection yields them.
    ///
    /// # Errors
    /// - `RepoError::Db` when the query cannot run (e.g. missing table).
    /// - `RepoError::Decode` when `id`, `title` or `author_name` is absent
    ///   or has an unexpected type.
    pub fn all(&self) -> RepoResult<Vec<BookStore>> {
        let started_at = Instant::now();

        match self.conn.query_all::<BookStore>(BOOKS_SELECT_SQL) {
            Ok(books) => {
                debug!(
                    "event=books_list module=repo status=ok count={} duration_ms={}",
                    books.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(books)
            }
            Err(err) => {
                error!(
                    "event=books_list module=repo status=error duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }
}
