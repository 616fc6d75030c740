//! Identifier types for admin records.
//!
//! Two identifiers flow through the admin tools: the [`UserId`] a record is
//! granted to, and the [`AdminId`] minted for the record itself. Both are
//! stored as TEXT columns and wrapped in newtypes so they cannot be mixed up.

use core::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Error returned when parsing an [`AdminId`] from text.
#[derive(thiserror::Error, Debug)]
#[error("invalid admin id: {0}")]
pub struct AdminIdError(#[from] uuid::Error);

/// The primary key of an admin record.
///
/// A fresh `AdminId` is a random UUID (version 4). Its textual form is the
/// lowercase hyphenated rendering, which is also how it is stored in the
/// `admins` table.
///
/// ## Examples
///
/// ```
/// use lockbox_core::AdminId;
///
/// let id = AdminId::generate();
/// assert_eq!(id.to_string().len(), 36);
///
/// let same: AdminId = id.to_string().parse().unwrap();
/// assert_eq!(same, id);
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct AdminId(Uuid);

impl AdminId {
    /// Mint a new random admin ID.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an `AdminId` from its textual form.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not a valid UUID.
    pub fn parse(s: &str) -> Result<Self, AdminIdError> {
        Ok(Self(Uuid::parse_str(s)?))
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for AdminId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for AdminId {
    type Err = AdminIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Uuid> for AdminId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<AdminId> for Uuid {
    fn from(id: AdminId) -> Self {
        id.0
    }
}

/// The identifier of a user, as issued by the application that owns the
/// `users` table.
///
/// User IDs are opaque to the admin tools: they are carried through to the
/// database exactly as given, with no validation. Whether an ID actually
/// refers to a user is for the database schema to decide.
///
/// ## Examples
///
/// ```
/// use lockbox_core::UserId;
///
/// let id = UserId::new("4e77b7c4-bef4-4c40-b72b-7fd4dd1aedf7");
/// assert_eq!(id.as_str(), "4e77b7c4-bef4-4c40-b72b-7fd4dd1aedf7");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Create a `UserId` from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the user ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `UserId` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for UserId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_owned()))
    }
}

impl From<String> for UserId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// SQLx support (with sqlite feature)
#[cfg(feature = "sqlite")]
impl sqlx::Type<sqlx::Sqlite> for AdminId {
    fn type_info() -> sqlx::sqlite::SqliteTypeInfo {
        <String as sqlx::Type<sqlx::Sqlite>>::type_info()
    }

    fn compatible(ty: &sqlx::sqlite::SqliteTypeInfo) -> bool {
        <String as sqlx::Type<sqlx::Sqlite>>::compatible(ty)
    }
}

#[cfg(feature = "sqlite")]
impl<'r> sqlx::Decode<'r, sqlx::Sqlite> for AdminId {
    fn decode(value: sqlx::sqlite::SqliteValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s = <String as sqlx::Decode<sqlx::Sqlite>>::decode(value)?;
        Ok(Self::parse(&s)?)
    }
}

#[cfg(feature = "sqlite")]
impl<'q> sqlx::Encode<'q, sqlx::Sqlite> for AdminId {
    fn encode_by_ref(
        &self,
        buf: &mut Vec<sqlx::sqlite::SqliteArgumentValue<'q>>,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        // Stored as hyphenated TEXT, not as a BLOB
        <String as sqlx::Encode<'q, sqlx::Sqlite>>::encode_by_ref(&self.0.to_string(), buf)
    }
}

#[cfg(feature = "sqlite")]
impl sqlx::Type<sqlx::Sqlite> for UserId {
    fn type_info() -> sqlx::sqlite::SqliteTypeInfo {
        <String as sqlx::Type<sqlx::Sqlite>>::type_info()
    }

    fn compatible(ty: &sqlx::sqlite::SqliteTypeInfo) -> bool {
        <String as sqlx::Type<sqlx::Sqlite>>::compatible(ty)
    }
}

#[cfg(feature = "sqlite")]
impl<'r> sqlx::Decode<'r, sqlx::Sqlite> for UserId {
    fn decode(value: sqlx::sqlite::SqliteValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s = <String as sqlx::Decode<sqlx::Sqlite>>::decode(value)?;
        // User IDs are opaque, so any stored text is acceptable
        Ok(Self(s))
    }
}

#[cfg(feature = "sqlite")]
impl<'q> sqlx::Encode<'q, sqlx::Sqlite> for UserId {
    fn encode_by_ref(
        &self,
        buf: &mut Vec<sqlx::sqlite::SqliteArgumentValue<'q>>,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <String as sqlx::Encode<'q, sqlx::Sqlite>>::encode_by_ref(&self.0, buf)
    }
}
