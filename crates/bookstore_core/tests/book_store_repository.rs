use bookstore_core::{
    open_db, open_db_in_memory, seed_from_file, seed_sql, BookStore, BookStoreRepository, DbError,
    FromRow, QueryConnection, RepoError, RepoResult,
};
use rusqlite::Connection;
use std::path::PathBuf;

const EMPTY_BOOKS_SQL: &str = "CREATE TABLE books (
    id INTEGER PRIMARY KEY,
    title TEXT NOT NULL,
    author_name TEXT NOT NULL
);";

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("seeds/book_store.sql")
}

fn seeded_connection() -> Connection {
    let conn = open_db_in_memory().unwrap();
    seed_from_file(&conn, fixture_path()).unwrap();
    conn
}

#[test]
fn all_returns_list_of_book_records() {
    let conn = seeded_connection();
    let repository = BookStoreRepository::new(&conn);

    let books = repository.all().unwrap();
    assert_eq!(
        books[0],
        BookStore::new(1, "Nineteen Eighty-Four", "George Orwell")
    );
    assert_eq!(books[4], BookStore::new(5, "The Age of Innocence", "Edith Wharton"));
}

#[test]
fn all_returns_one_record_per_row() {
    let conn = seeded_connection();
    let row_count: i64 = conn
        .query_row("SELECT COUNT(*) FROM books;", [], |row| row.get(0))
        .unwrap();

    let books = BookStoreRepository::new(&conn).all().unwrap();
    assert_eq!(books.len() as i64, row_count);
    assert_eq!(books.len(), 5);
}

#[test]
fn all_on_empty_table_returns_empty_list() {
    let conn = open_db_in_memory().unwrap();
    seed_sql(&conn, EMPTY_BOOKS_SQL).unwrap();

    let books = BookStoreRepository::new(&conn).all().unwrap();
    assert!(books.is_empty());
}

#[test]
fn all_preserves_connection_row_order() {
    let conn = open_db_in_memory().unwrap();
    seed_sql(
        &conn,
        "CREATE TABLE books (title TEXT NOT NULL, author_name TEXT NOT NULL, id INTEGER NOT NULL);
         INSERT INTO books (id, title, author_name) VALUES (30, 'Emma', 'Jane Austen');
         INSERT INTO books (id, title, author_name) VALUES (10, 'Dracula', 'Bram Stoker');
         INSERT INTO books (id, title, author_name) VALUES (20, 'Mrs Dalloway', 'Virginia Woolf');",
    )
    .unwrap();

    let mut stmt = conn.prepare("SELECT * FROM books").unwrap();
    let expected_ids: Vec<i64> = stmt
        .query_map([], |row| row.get("id"))
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();

    let books = BookStoreRepository::new(&conn).all().unwrap();
    let ids: Vec<i64> = books.iter().map(|book| book.id).collect();
    assert_eq!(ids, expected_ids);
    assert_eq!(books[0], BookStore::new(30, "Emma", "Jane Austen"));
}

#[test]
fn all_is_idempotent_without_writes() {
    let conn = seeded_connection();
    let repository = BookStoreRepository::new(&conn);

    let first = repository.all().unwrap();
    let second = repository.all().unwrap();
    assert_eq!(first, second);
}

#[test]
fn all_observes_writes_between_calls() {
    let conn = seeded_connection();
    let repository = BookStoreRepository::new(&conn);
    let before = repository.all().unwrap();

    conn.execute(
        "INSERT INTO books (title, author_name) VALUES (?1, ?2);",
        ["Frankenstein", "Mary Shelley"],
    )
    .unwrap();

    let after = repository.all().unwrap();
    assert_eq!(after.len(), before.len() + 1);
    assert_eq!(
        after.last().unwrap(),
        &BookStore::new(6, "Frankenstein", "Mary Shelley")
    );
}

#[test]
fn all_without_books_table_returns_db_error() {
    let conn = open_db_in_memory().unwrap();

    let err = BookStoreRepository::new(&conn).all().unwrap_err();
    assert!(matches!(err, RepoError::Db(DbError::Sqlite(_))));
    assert!(err.to_string().contains("no such table"));
}

#[test]
fn all_with_missing_column_returns_decode_error() {
    let conn = open_db_in_memory().unwrap();
    seed_sql(
        &conn,
        "CREATE TABLE books (id INTEGER PRIMARY KEY, title TEXT NOT NULL);
         INSERT INTO books (title) VALUES ('Anonymous');",
    )
    .unwrap();

    let err = BookStoreRepository::new(&conn).all().unwrap_err();
    assert!(matches!(
        err,
        RepoError::Decode(rusqlite::Error::InvalidColumnName(ref name)) if name == "author_name"
    ));
}

#[test]
fn all_with_unexpected_column_type_returns_decode_error() {
    let conn = open_db_in_memory().unwrap();
    seed_sql(
        &conn,
        "CREATE TABLE books (id INTEGER PRIMARY KEY, title BLOB, author_name TEXT);
         INSERT INTO books (title, author_name) VALUES (x'00ff', 'George Orwell');",
    )
    .unwrap();

    let err = BookStoreRepository::new(&conn).all().unwrap_err();
    assert!(matches!(
        err,
        RepoError::Decode(rusqlite::Error::InvalidColumnType(..))
    ));
}

#[test]
fn all_on_empty_table_with_missing_column_still_succeeds() {
    let conn = open_db_in_memory().unwrap();
    seed_sql(&conn, "CREATE TABLE books (id INTEGER PRIMARY KEY);").unwrap();

    let books = BookStoreRepository::new(&conn).all().unwrap();
    assert!(books.is_empty());
}

struct FailingConnection;

impl QueryConnection for FailingConnection {
    fn query_all<T: FromRow>(&self, _sql: &str) -> RepoResult<Vec<T>> {
        Err(RepoError::Db(DbError::Sqlite(rusqlite::Error::InvalidPath(
            PathBuf::from("/unreachable/books.db"),
        ))))
    }
}

#[test]
fn all_propagates_connection_failure_unchanged() {
    let conn = FailingConnection;

    let err = BookStoreRepository::new(&conn).all().unwrap_err();
    match err {
        RepoError::Db(DbError::Sqlite(rusqlite::Error::InvalidPath(path))) => {
            assert_eq!(path, PathBuf::from("/unreachable/books.db"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[derive(Default)]
struct RecordingConnection {
    queries: std::cell::RefCell<Vec<String>>,
}

impl QueryConnection for RecordingConnection {
    fn query_all<T: FromRow>(&self, sql: &str) -> RepoResult<Vec<T>> {
        self.queries.borrow_mut().push(sql.to_string());
        Ok(Vec::new())
    }
}

#[test]
fn all_issues_fixed_unparameterized_query_every_call() {
    let conn = RecordingConnection::default();
    let repository = BookStoreRepository::new(&conn);

    repository.all().unwrap();
    repository.all().unwrap();

    assert_eq!(
        *conn.queries.borrow(),
        vec!["SELECT * FROM books".to_string(); 2]
    );
}

#[test]
fn all_reads_from_file_database() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("books.db");

    let conn = open_db(&path).unwrap();
    seed_from_file(&conn, fixture_path()).unwrap();
    drop(conn);

    let reopened = open_db(&path).unwrap();
    let books = BookStoreRepository::new(&reopened).all().unwrap();
    assert_eq!(books.len(), 5);
    assert_eq!(books[3], BookStore::new(4, "Dracula", "Bram Stoker"));
}
