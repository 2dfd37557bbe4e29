//! The user resource: its record, its errors and the five operations on its table.

/// Errors returned by the user operations.
pub mod error;

/// The user record and its table and JSON encodings.
pub mod record;

/// Fetch, create, update and delete users in a [`crate::store::Store`].
pub mod service;
