//! SQLite connection bootstrap and fixture seeding.
//!
//! # Responsibility
//! - Open file or in-memory SQLite connections configured for core use.
//! - Load SQL fixtures into a caller-owned connection.
//!
//! # Invariants
//! - Nothing in this module creates or versions the `books` schema on open.
//! - Callers own the returned connections; repositories only borrow them.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

mod open;
mod seed;

pub use open::{open_db, open_db_in_memory, open_existing_db};
pub use seed::{seed_from_file, seed_sql};

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::Io { path, source } => {
                write!(f, "failed to read `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::Io { source, .. } => Some(source),
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
