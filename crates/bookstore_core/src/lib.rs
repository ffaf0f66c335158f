//! Core data access for the book store.
//! Maps rows of the `books` table into `BookStore` records.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;

pub use db::{
    open_db, open_db_in_memory, open_existing_db, seed_from_file, seed_sql, DbError, DbResult,
};
pub use logging::{default_log_level, flush_logs, init_logging, logging_status, LogLevel};
pub use model::book::{BookId, BookStore};
pub use repo::book_repo::BookStoreRepository;
pub use repo::connection::{FromRow, QueryConnection, RepoError, RepoResult};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
