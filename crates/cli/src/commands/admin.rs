//! Admin record management commands.
//!
//! # Usage
//!
//! ```bash
//! # Grant admin status to a user
//! lb-cli admin grant -u 4e77b7c4-bef4-4c40-b72b-7fd4dd1aedf7 -d lockbox.db
//!
//! # Check whether a user currently has admin status
//! lb-cli admin check -u 4e77b7c4-bef4-4c40-b72b-7fd4dd1aedf7 -d lockbox.db
//!
//! # List every admin record, newest first
//! lb-cli admin list -d lockbox.db
//! ```
//!
//! # Environment Variables
//!
//! - `LOCKBOX_DATABASE` - Path to the Lockbox SQLite database, used when
//!   `--database` is not passed

use sqlx::Connection;
use sqlx::SqliteConnection;
use thiserror::Error;

use lockbox_core::{AdminId, UserId, timestamp};

use crate::config::DbConfig;
use crate::db::{self, AdminRepository, RepositoryError};
use crate::models::AdminRecord;

/// Errors that can occur during `check` and `list`.
///
/// `grant` reports through [`GrantOutcome`] instead and never returns one
/// of these.
#[derive(Debug, Error)]
pub enum AdminError {
    /// Database connection error.
    #[error("Database connection error: {0}")]
    Connection(#[from] sqlx::Error),

    /// Error from the admin repository.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Why a grant attempt did not end with a confirmed admin record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrantFailure {
    /// The schema rejected the insert: duplicate grant under a UNIQUE
    /// index, or an unknown user under a foreign key.
    ConstraintViolation,
    /// The database file could not be opened.
    Connection,
    /// The insert, commit, or confirmation read failed.
    Query,
    /// The insert reported success but the confirmation read found no row.
    Verification,
}

/// The result of a grant attempt.
///
/// Every failure mode is folded in here rather than surfaced as an error:
/// a refused grant is an answer, not a crash, and the process exits
/// normally either way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GrantOutcome {
    /// The record was inserted and confirmed by a re-query.
    Granted {
        /// ID minted for the new admin record.
        admin_id: AdminId,
        /// User the record was granted to.
        user_id: UserId,
    },
    /// The grant did not go through.
    Failed {
        /// What went wrong, coarsely.
        kind: GrantFailure,
        /// Human-readable detail, usually straight from the database.
        message: String,
    },
}

/// Grant admin status to a user.
///
/// Opens one connection, inserts a freshly minted record inside an
/// explicitly committed transaction, then re-queries to confirm the row
/// landed. Single attempt, no retries; the connection is closed on every
/// path that managed to open it.
pub async fn grant(config: &DbConfig, user_id: UserId) -> GrantOutcome {
    tracing::info!("Connecting to database: {}", config.database.display());

    let mut conn = match db::connect(&config.database).await {
        Ok(conn) => conn,
        Err(e) => {
            return GrantOutcome::Failed {
                kind: GrantFailure::Connection,
                message: e.to_string(),
            };
        }
    };

    let outcome = grant_on(&mut conn, user_id).await;
    close_quietly(conn).await;

    outcome
}

/// The part of [`grant`] that runs once a connection is open.
async fn grant_on(conn: &mut SqliteConnection, user_id: UserId) -> GrantOutcome {
    let record = AdminRecord::new(user_id);
    tracing::info!("Granting admin status to user: {}", record.user_id);

    let mut repo = AdminRepository::new(conn);

    match repo.insert(&record).await {
        Ok(()) => {}
        Err(RepositoryError::Conflict(message)) => {
            return GrantOutcome::Failed {
                kind: GrantFailure::ConstraintViolation,
                message,
            };
        }
        Err(e) => {
            return GrantOutcome::Failed {
                kind: GrantFailure::Query,
                message: e.to_string(),
            };
        }
    }

    // Re-query to confirm the committed row is actually visible
    match repo.find_by_user(&record.user_id).await {
        Ok(Some(_)) => {
            tracing::info!(
                "Admin record created successfully! ID: {}, User: {}",
                record.id,
                record.user_id
            );
            GrantOutcome::Granted {
                admin_id: record.id,
                user_id: record.user_id,
            }
        }
        Ok(None) => GrantOutcome::Failed {
            kind: GrantFailure::Verification,
            message: "Failed to add user as admin".to_owned(),
        },
        Err(e) => GrantOutcome::Failed {
            kind: GrantFailure::Query,
            message: e.to_string(),
        },
    }
}

/// Look up the admin record for a user, if any.
///
/// # Errors
///
/// Returns `AdminError::Connection` if the database cannot be opened, or
/// `AdminError::Repository` if the lookup fails.
pub async fn check(
    config: &DbConfig,
    user_id: &UserId,
) -> Result<Option<AdminRecord>, AdminError> {
    tracing::info!("Connecting to database: {}", config.database.display());

    let mut conn = db::connect(&config.database).await?;
    let found = AdminRepository::new(&mut conn).find_by_user(user_id).await;
    close_quietly(conn).await;

    Ok(found?)
}

/// List all admin records, newest first.
///
/// # Errors
///
/// Returns `AdminError::Connection` if the database cannot be opened, or
/// `AdminError::Repository` if the query fails.
pub async fn list(config: &DbConfig) -> Result<Vec<AdminRecord>, AdminError> {
    tracing::info!("Connecting to database: {}", config.database.display());

    let mut conn = db::connect(&config.database).await?;
    let records = AdminRepository::new(&mut conn).list_all().await;
    close_quietly(conn).await;

    Ok(records?)
}

/// Close a connection, downgrading any close error to a warning.
async fn close_quietly(conn: SqliteConnection) {
    if let Err(e) = conn.close().await {
        tracing::warn!("Error closing database connection: {e}");
    }
}

/// Print the outcome of a grant, followed by a copy-pasteable SQL hint
/// for checking the table by hand.
#[allow(clippy::print_stdout)]
pub fn report_grant(config: &DbConfig, user_id: &UserId, outcome: &GrantOutcome) {
    match outcome {
        GrantOutcome::Granted { admin_id, .. } => {
            println!("✅ User {user_id} successfully added as admin with admin ID: {admin_id}");
        }
        GrantOutcome::Failed {
            kind: GrantFailure::Verification,
            message,
        } => {
            println!("❌ {message}");
        }
        GrantOutcome::Failed {
            kind: GrantFailure::ConstraintViolation,
            message,
        } => {
            println!("❌ Error: {message}");
            println!("This may occur if the user ID doesn't exist or is already an admin.");
        }
        GrantOutcome::Failed { message, .. } => {
            println!("❌ Error: {message}");
        }
    }

    println!();
    println!("To verify, you can run this SQL command:");
    println!(
        "sqlite3 {} 'SELECT * FROM admins WHERE user_id=\"{user_id}\";'",
        config.database.display()
    );
}

/// Print the result of a `check`.
#[allow(clippy::print_stdout)]
pub fn report_check(user_id: &UserId, record: Option<&AdminRecord>) {
    match record {
        Some(record) => {
            println!("✅ User {user_id} is an admin (admin ID: {})", record.id);
        }
        None => {
            println!("❌ User {user_id} is not an admin");
        }
    }
}

/// Print the result of a `list`.
#[allow(clippy::print_stdout)]
pub fn report_list(records: &[AdminRecord]) {
    if records.is_empty() {
        println!("No admin records found");
        return;
    }

    println!("{} admin record(s), newest first:", records.len());
    for record in records {
        println!(
            "  {}  user: {}  created: {}",
            record.id,
            record.user_id,
            timestamp::format(record.created_at)
        );
    }
}
