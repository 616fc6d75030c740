//! Lockbox CLI library.
//!
//! This crate provides the admin management commands as a library,
//! allowing them to be tested and reused. The `lb-cli` binary is a thin
//! wrapper over [`commands`].
//!
//! # Database ownership
//!
//! The Lockbox SQLite database belongs to the main application. These tools
//! open it as-is: they never create the file, never define tables, and leave
//! every constraint decision to the schema they find.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod commands;
pub mod config;
pub mod db;
pub mod models;
