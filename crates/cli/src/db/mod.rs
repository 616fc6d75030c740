//! Database operations for the Lockbox SQLite file.
//!
//! # Tables
//!
//! - `admins` - Admin grants: `id`, `user_id`, `created_at`, `updated_at`,
//!   all TEXT
//!
//! The schema is created and migrated by the main Lockbox application, not
//! by these tools. Depending on the deployed schema version, `user_id` may
//! or may not carry a UNIQUE index or a foreign key into `users`; the
//! repository surfaces whatever the schema decides as a conflict.

pub mod admins;

use std::path::Path;

use sqlx::Connection;
use sqlx::SqliteConnection;
use sqlx::sqlite::SqliteConnectOptions;
use thiserror::Error;

pub use admins::AdminRepository;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Constraint violation (e.g., duplicate grant or unknown user).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Open a single connection to an existing Lockbox database file.
///
/// The file is opened as-is: a missing file is a connection error, not an
/// invitation to create one.
///
/// # Errors
///
/// Returns `sqlx::Error` if the file cannot be opened.
pub async fn connect(path: &Path) -> Result<SqliteConnection, sqlx::Error> {
    let options = SqliteConnectOptions::new().filename(path);
    SqliteConnection::connect_with(&options).await
}
