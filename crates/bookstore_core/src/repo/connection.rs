//! Query capability consumed by repositories.
//!
//! # Responsibility
//! - Describe "execute a query, yield typed rows" as a trait so repositories
//!   stay independent of how the connection was created.
//! - Separate transport failures from row decoding failures.
//!
//! # Invariants
//! - Rows are decoded in the order the connection yields them.
//! - Exactly one decoded value is produced per row.

use crate::db::DbError;
use rusqlite::{Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository-level error for query execution and row decoding.
#[derive(Debug)]
pub enum RepoError {
    /// Statement could not be prepared or executed, or stepping rows failed.
    Db(DbError),
    /// A row was missing a column or carried an unexpected column type.
    Decode(rusqlite::Error),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Decode(err) => write!(f, "failed to decode row: {err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Decode(err) => Some(err),
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Statically typed decoding of one result row by column name.
pub trait FromRow: Sized {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self>;
}

/// Anything able to run an unparameterized query and decode every row.
pub trait QueryConnection {
    fn query_all<T: FromRow>(&self, sql: &str) -> RepoResult<Vec<T>>;
}

impl QueryConnection for Connection {
    fn query_all<T: FromRow>(&self, sql: &str) -> RepoResult<Vec<T>> {
        let mut stmt = self.prepare(sql)?;
        let mut rows = stmt.query([])?;
        let mut decoded = Vec::new();

        while let Some(row) = rows.next()? {
            decoded.push(T::from_row(row).map_err(RepoError::Decode)?);
        }

        Ok(decoded)
    }
}
