//! SQL fixture loading.
//!
//! Fixtures are plain SQL batches (schema plus rows) executed as-is against a
//! caller-owned connection.

use super::{DbError, DbResult};
use log::{error, info};
use rusqlite::Connection;
use std::path::Path;
use std::time::Instant;

/// Executes a SQL batch against `conn`.
pub fn seed_sql(conn: &Connection, sql: &str) -> DbResult<()> {
    with_seed_events("inline", || Ok(conn.execute_batch(sql)?))
}

/// Reads a SQL fixture file and executes it as one batch.
///
/// # Errors
/// - `DbError::Io` when the file cannot be read.
/// - `DbError::Sqlite` when any statement in the batch fails.
pub fn seed_from_file(conn: &Connection, path: impl AsRef<Path>) -> DbResult<()> {
    let path = path.as_ref();
    with_seed_events(&path.display().to_string(), || {
        let sql = std::fs::read_to_string(path).map_err(|source| DbError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        conn.execute_batch(&sql)?;
        Ok(())
    })
}

fn with_seed_events(source: &str, seed: impl FnOnce() -> DbResult<()>) -> DbResult<()> {
    let started_at = Instant::now();
    info!("event=db_seed module=db status=start source={source}");

    match seed() {
        Ok(()) => {
            info!(
                "event=db_seed module=db status=ok source={source} duration_ms={}",
                started_at.elapsed().as_millis()
            );
            Ok(())
        }
        Err(err) => {
            error!(
                "event=db_seed module=db status=error source={source} duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}
