//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `bookstore_core` linkage with deterministic output.
//! - List the books of an existing SQLite file when a path is given.
//! - Route core log events to `--log-dir` when requested.

use bookstore_core::{
    default_log_level, flush_logs, init_logging, open_existing_db, BookStoreRepository,
};
use clap::Parser;
use log::info;
use std::error::Error;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Lists every book stored in a book store SQLite database.
#[derive(Parser, Debug)]
#[command(name = "bookstore_cli", version)]
struct Cli {
    /// Existing SQLite database with a `books` table; omit for a smoke check
    db_path: Option<PathBuf>,

    /// Directory for rotated log files; logging stays off when omitted
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Log level (trace|debug|info|warn|error); defaults by build mode
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = run(&cli);
    flush_logs();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    if let Some(log_dir) = &cli.log_dir {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        let log_dir = absolute(log_dir)?;
        init_logging(level, &log_dir.to_string_lossy())?;
    }

    let Some(db_path) = &cli.db_path else {
        println!("bookstore_core ping={}", bookstore_core::ping());
        println!("bookstore_core version={}", bookstore_core::core_version());
        return Ok(());
    };

    let conn = open_existing_db(db_path)?;
    let books = BookStoreRepository::new(&conn).all()?;
    for book in &books {
        println!("{book}");
    }
    info!("event=cli_list module=cli status=ok count={}", books.len());
    Ok(())
}

fn absolute(path: &Path) -> std::io::Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}
