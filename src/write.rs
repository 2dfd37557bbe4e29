//! Write operations for modifying data in DynamoDB tables.
//!
//! This module provides operations for writing data to DynamoDB:
//! - Putting new items or replacing existing ones, optionally guarded by an existence condition
//! - Deleting items by partition key

/// Common utilities and types for write operations.
pub mod common;

/// Delete item operation for removing items by partition key.
pub mod delete_item;

/// Put item operation for creating or replacing items.
pub mod put_item;
