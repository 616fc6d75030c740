//! Lockbox Core - Shared types library.
//!
//! This crate provides common types used across the Lockbox admin tools:
//! - `cli` - Command-line tools for managing admin access
//! - `integration-tests` - End-to-end tests against real database files
//!
//! # Architecture
//!
//! The core crate contains only types and pure helpers - no I/O, no database
//! access. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for identifiers and the storage timestamp format

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
