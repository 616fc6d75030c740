//! CLI configuration resolved from flags and environment variables.
//!
//! # Environment Variables
//!
//! - `LOCKBOX_DATABASE` - Path to the Lockbox SQLite database file, used
//!   when a command is invoked without `--database`

use std::path::PathBuf;

use thiserror::Error;

/// Environment variable consulted when `--database` is not given.
pub const DATABASE_ENV_VAR: &str = "LOCKBOX_DATABASE";

/// Configuration errors that can occur during resolution.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no database path given: pass --database or set {DATABASE_ENV_VAR}")]
    MissingDatabase,
}

/// Database settings shared by all admin commands.
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// Path to the SQLite database file.
    pub database: PathBuf,
}

impl DbConfig {
    /// Resolve the database path from a `--database` flag value, falling
    /// back to [`DATABASE_ENV_VAR`].
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingDatabase` if neither source provides
    /// a path.
    pub fn resolve(flag: Option<PathBuf>) -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_sources(flag, std::env::var_os(DATABASE_ENV_VAR).map(PathBuf::from))
    }

    /// Pick the database path from the two sources, flag first.
    fn from_sources(flag: Option<PathBuf>, env: Option<PathBuf>) -> Result<Self, ConfigError> {
        flag.or(env)
            .map(|database| Self { database })
            .ok_or(ConfigError::MissingDatabase)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_wins_over_env() {
        let config = DbConfig::from_sources(
            Some(PathBuf::from("flag.db")),
            Some(PathBuf::from("env.db")),
        )
        .unwrap();
        assert_eq!(config.database, PathBuf::from("flag.db"));
    }

    #[test]
    fn test_env_used_when_flag_absent() {
        let config = DbConfig::from_sources(None, Some(PathBuf::from("env.db"))).unwrap();
        assert_eq!(config.database, PathBuf::from("env.db"));
    }

    #[test]
    fn test_missing_both_sources() {
        let result = DbConfig::from_sources(None, None);
        assert!(matches!(result, Err(ConfigError::MissingDatabase)));
    }

    #[test]
    fn test_error_message_names_both_sources() {
        let err = DbConfig::from_sources(None, None).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("--database"));
        assert!(message.contains(DATABASE_ENV_VAR));
    }
}
