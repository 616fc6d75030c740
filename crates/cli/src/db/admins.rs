//! Admin repository for database operations.
//!
//! Queries use the runtime sqlx API with `?` placeholders. All columns of
//! the `admins` table are TEXT, so rows decode into strings first and are
//! then checked on the way into the domain type.

use sqlx::Connection;
use sqlx::SqliteConnection;

use lockbox_core::{UserId, timestamp};

use super::RepositoryError;
use crate::models::AdminRecord;

// =============================================================================
// Internal Row Types
// =============================================================================

/// Internal row type for `admins` queries.
#[derive(Debug, sqlx::FromRow)]
struct AdminRow {
    id: String,
    user_id: String,
    created_at: String,
    updated_at: String,
}

impl TryFrom<AdminRow> for AdminRecord {
    type Error = RepositoryError;

    fn try_from(row: AdminRow) -> Result<Self, Self::Error> {
        let id = row.id.parse().map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid admin id in database: {e}"))
        })?;

        let created_at = timestamp::parse(&row.created_at).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid created_at in database: {e}"))
        })?;

        let updated_at = timestamp::parse(&row.updated_at).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid updated_at in database: {e}"))
        })?;

        Ok(Self {
            id,
            user_id: UserId::new(row.user_id),
            created_at,
            updated_at,
        })
    }
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for admin record database operations.
pub struct AdminRepository<'a> {
    conn: &'a mut SqliteConnection,
}

impl<'a> AdminRepository<'a> {
    /// Create a new admin repository over an open connection.
    #[must_use]
    pub const fn new(conn: &'a mut SqliteConnection) -> Self {
        Self { conn }
    }

    /// Insert a new admin record inside an explicitly committed transaction.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the schema rejects the row
    /// (duplicate grant under a UNIQUE index, or an unknown user under a
    /// foreign key).
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn insert(&mut self, record: &AdminRecord) -> Result<(), RepositoryError> {
        let mut tx = self.conn.begin().await?;

        sqlx::query(
            "INSERT INTO admins (id, user_id, created_at, updated_at) VALUES (?, ?, ?, ?)",
        )
        .bind(record.id)
        .bind(record.user_id.clone())
        .bind(timestamp::format(record.created_at))
        .bind(timestamp::format(record.updated_at))
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && (db_err.is_unique_violation() || db_err.is_foreign_key_violation())
            {
                return RepositoryError::Conflict(db_err.message().to_owned());
            }
            RepositoryError::Database(e)
        })?;

        tx.commit().await?;

        Ok(())
    }

    /// Find one admin record for a user, if any exists.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the stored data is invalid.
    pub async fn find_by_user(
        &mut self,
        user_id: &UserId,
    ) -> Result<Option<AdminRecord>, RepositoryError> {
        let row = sqlx::query_as::<_, AdminRow>(
            "SELECT id, user_id, created_at, updated_at FROM admins WHERE user_id = ? LIMIT 1",
        )
        .bind(user_id.clone())
        .fetch_optional(&mut *self.conn)
        .await?;

        row.map(TryInto::try_into).transpose()
    }

    /// List all admin records, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if any stored data is invalid.
    pub async fn list_all(&mut self) -> Result<Vec<AdminRecord>, RepositoryError> {
        let rows = sqlx::query_as::<_, AdminRow>(
            "SELECT id, user_id, created_at, updated_at FROM admins ORDER BY created_at DESC",
        )
        .fetch_all(&mut *self.conn)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use sqlx::sqlite::SqliteConnectOptions;

    use super::*;

    const CREATE_ADMINS: &str = "CREATE TABLE admins (
        id TEXT PRIMARY KEY,
        user_id TEXT NOT NULL,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )";

    const CREATE_ADMINS_UNIQUE_USER: &str = "CREATE TABLE admins (
        id TEXT PRIMARY KEY,
        user_id TEXT NOT NULL UNIQUE,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )";

    const CREATE_USERS: &str = "CREATE TABLE users (id TEXT PRIMARY KEY)";

    const CREATE_ADMINS_USER_FK: &str = "CREATE TABLE admins (
        id TEXT PRIMARY KEY,
        user_id TEXT NOT NULL REFERENCES users (id),
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )";

    async fn memory_db(schema: &[&str]) -> SqliteConnection {
        let mut conn =
            SqliteConnection::connect_with(&SqliteConnectOptions::new().in_memory(true))
                .await
                .unwrap();
        for sql in schema {
            sqlx::query(sql).execute(&mut conn).await.unwrap();
        }
        conn
    }

    #[tokio::test]
    async fn test_insert_and_find_roundtrip() {
        let mut conn = memory_db(&[CREATE_ADMINS]).await;
        let mut repo = AdminRepository::new(&mut conn);

        let record = AdminRecord::new(UserId::new("alice"));
        repo.insert(&record).await.unwrap();

        let found = repo.find_by_user(&record.user_id).await.unwrap().unwrap();
        assert_eq!(found, record);
    }

    #[tokio::test]
    async fn test_find_missing_user_returns_none() {
        let mut conn = memory_db(&[CREATE_ADMINS]).await;
        let mut repo = AdminRepository::new(&mut conn);

        let found = repo.find_by_user(&UserId::new("nobody")).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_grant_conflicts_under_unique_index() {
        let mut conn = memory_db(&[CREATE_ADMINS_UNIQUE_USER]).await;
        let mut repo = AdminRepository::new(&mut conn);

        repo.insert(&AdminRecord::new(UserId::new("alice")))
            .await
            .unwrap();
        let second = repo.insert(&AdminRecord::new(UserId::new("alice"))).await;

        assert!(matches!(second, Err(RepositoryError::Conflict(_))));

        let all = repo.list_all().await.unwrap();
        assert_eq!(all.len(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_grant_allowed_without_unique_index() {
        let mut conn = memory_db(&[CREATE_ADMINS]).await;
        let mut repo = AdminRepository::new(&mut conn);

        let first = AdminRecord::new(UserId::new("alice"));
        let second = AdminRecord::new(UserId::new("alice"));
        repo.insert(&first).await.unwrap();
        repo.insert(&second).await.unwrap();

        let all = repo.list_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn test_unknown_user_conflicts_under_foreign_key() {
        let mut conn = memory_db(&[CREATE_USERS, CREATE_ADMINS_USER_FK]).await;
        let mut repo = AdminRepository::new(&mut conn);

        let rejected = repo.insert(&AdminRecord::new(UserId::new("ghost"))).await;
        assert!(matches!(rejected, Err(RepositoryError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_known_user_accepted_under_foreign_key() {
        let mut conn = memory_db(&[CREATE_USERS, CREATE_ADMINS_USER_FK]).await;
        sqlx::query("INSERT INTO users (id) VALUES ('alice')")
            .execute(&mut conn)
            .await
            .unwrap();

        let mut repo = AdminRepository::new(&mut conn);
        repo.insert(&AdminRecord::new(UserId::new("alice")))
            .await
            .unwrap();

        let found = repo.find_by_user(&UserId::new("alice")).await.unwrap();
        assert!(found.is_some());
    }

    #[tokio::test]
    async fn test_find_surfaces_corrupt_rows() {
        let mut conn = memory_db(&[CREATE_ADMINS]).await;
        sqlx::query(
            "INSERT INTO admins (id, user_id, created_at, updated_at)
             VALUES ('not-a-uuid', 'alice', 'garbage', 'garbage')",
        )
        .execute(&mut conn)
        .await
        .unwrap();

        let mut repo = AdminRepository::new(&mut conn);
        let result = repo.find_by_user(&UserId::new("alice")).await;
        assert!(matches!(result, Err(RepositoryError::DataCorruption(_))));
    }

    #[tokio::test]
    async fn test_list_all_orders_newest_first() {
        let mut conn = memory_db(&[CREATE_ADMINS]).await;
        let mut repo = AdminRepository::new(&mut conn);

        let older = AdminRecord {
            created_at: timestamp::parse("2026-01-01T00:00:00").unwrap(),
            updated_at: timestamp::parse("2026-01-01T00:00:00").unwrap(),
            ..AdminRecord::new(UserId::new("older"))
        };
        let newer = AdminRecord {
            created_at: timestamp::parse("2026-02-01T00:00:00").unwrap(),
            updated_at: timestamp::parse("2026-02-01T00:00:00").unwrap(),
            ..AdminRecord::new(UserId::new("newer"))
        };
        repo.insert(&older).await.unwrap();
        repo.insert(&newer).await.unwrap();

        let all = repo.list_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all.first().unwrap().user_id.as_str(), "newer");
        assert_eq!(all.last().unwrap().user_id.as_str(), "older");
    }
}
