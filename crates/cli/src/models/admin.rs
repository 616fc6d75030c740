//! Admin record domain types.

use chrono::NaiveDateTime;

use lockbox_core::{AdminId, UserId, timestamp};

/// A row of the `admins` table (domain type).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminRecord {
    /// Unique admin record ID.
    pub id: AdminId,
    /// User this record grants admin status to.
    pub user_id: UserId,
    /// When the record was created.
    pub created_at: NaiveDateTime,
    /// When the record was last updated.
    pub updated_at: NaiveDateTime,
}

impl AdminRecord {
    /// Mint a fresh record for a user.
    ///
    /// The ID is a new random UUID and the clock is read exactly once, so
    /// `created_at` and `updated_at` carry the same instant.
    #[must_use]
    pub fn new(user_id: UserId) -> Self {
        let now = timestamp::now_local();
        Self {
            id: AdminId::generate(),
            user_id,
            created_at: now,
            updated_at: now,
        }
    }
}
