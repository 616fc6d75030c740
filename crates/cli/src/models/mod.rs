//! Domain models for the admin tools.

pub mod admin;

pub use admin::AdminRecord;
