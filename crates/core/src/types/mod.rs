//! Core types for the Lockbox admin tools.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod timestamp;

pub use id::{AdminId, AdminIdError, UserId};
pub use timestamp::TimestampError;
