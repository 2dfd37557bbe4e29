//! Read operations for retrieving data from DynamoDB tables.
//!
//! This module provides operations for reading data from DynamoDB:
//! - Getting individual items by partition key
//! - Scanning entire tables

/// Get item operation for retrieving a single item by partition key.
pub mod get_item;

/// Scan operation for retrieving all items from a table.
pub mod scan;
