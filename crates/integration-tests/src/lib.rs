//! Integration tests for the Lockbox admin tools.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p lockbox-integration-tests
//! ```
//!
//! # Test Setup
//!
//! The admin tools never create the database file or its schema; in
//! production both belong to the main Lockbox application. The helpers in
//! this crate play that application's part: each test creates a real
//! database file in a temp directory, applies one of the schema variants
//! below, and only then invokes the commands under test.
//!
//! The variants cover the deployments seen in the wild: with and without
//! a UNIQUE index on `admins.user_id`, and with or without a foreign key
//! into `users`.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::Path;

use sqlx::Connection;
use sqlx::SqliteConnection;
use sqlx::sqlite::SqliteConnectOptions;

/// `admins` table with no cross-row constraints: repeated grants for the
/// same user are allowed.
pub const ADMINS_TABLE: &str = "CREATE TABLE admins (
    id TEXT PRIMARY KEY,
    user_id TEXT NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
)";

/// `admins` table with a UNIQUE index on `user_id`: at most one grant per
/// user.
pub const ADMINS_TABLE_UNIQUE_USER: &str = "CREATE TABLE admins (
    id TEXT PRIMARY KEY,
    user_id TEXT NOT NULL UNIQUE,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
)";

/// Minimal `users` table for the foreign-key variants.
pub const USERS_TABLE: &str = "CREATE TABLE users (id TEXT PRIMARY KEY)";

/// `admins` table whose `user_id` must reference an existing user.
pub const ADMINS_TABLE_USER_FK: &str = "CREATE TABLE admins (
    id TEXT PRIMARY KEY,
    user_id TEXT NOT NULL REFERENCES users (id),
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
)";

/// Create a database file at `path` and apply schema statements to it.
///
/// # Errors
///
/// Returns `sqlx::Error` if the file cannot be created or a statement
/// fails.
pub async fn create_database(path: &Path, schema: &[&str]) -> Result<(), sqlx::Error> {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true);
    let mut conn = SqliteConnection::connect_with(&options).await?;

    for sql in schema {
        sqlx::query(sql).execute(&mut conn).await?;
    }

    conn.close().await
}

/// Run one SQL statement against an existing database file.
///
/// # Errors
///
/// Returns `sqlx::Error` if the file cannot be opened or the statement
/// fails.
pub async fn execute_sql(path: &Path, sql: &str) -> Result<(), sqlx::Error> {
    let options = SqliteConnectOptions::new().filename(path);
    let mut conn = SqliteConnection::connect_with(&options).await?;

    sqlx::query(sql).execute(&mut conn).await?;

    conn.close().await
}

/// Fetch every `admins` row as raw text columns
/// `(id, user_id, created_at, updated_at)`, in insertion order.
///
/// Reads the raw TEXT so tests can assert on exactly what was stored,
/// independent of the domain types under test.
///
/// # Errors
///
/// Returns `sqlx::Error` if the file cannot be opened or the query fails.
pub async fn fetch_admin_rows(
    path: &Path,
) -> Result<Vec<(String, String, String, String)>, sqlx::Error> {
    let options = SqliteConnectOptions::new().filename(path);
    let mut conn = SqliteConnection::connect_with(&options).await?;

    let rows = sqlx::query_as::<_, (String, String, String, String)>(
        "SELECT id, user_id, created_at, updated_at FROM admins ORDER BY rowid",
    )
    .fetch_all(&mut conn)
    .await?;

    conn.close().await?;

    Ok(rows)
}
