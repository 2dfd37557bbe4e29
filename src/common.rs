//! Common utilities for DynamoDB operations.
//!
//! This module provides the shared types used by read and write requests:
//! the partition key of an item and the existence conditions attached to writes.

/// Write conditions on attribute existence.
pub mod condition;

/// Key types for identifying items in DynamoDB tables.
pub mod key;

use std::collections;

/// rendered expression with its attribute name placeholders
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct ExpressionInput {
    pub(crate) expression: String,
    pub(crate) expression_attribute_names: collections::HashMap<String, String>,
}

pub(crate) fn placeholder(name: &str) -> String {
    format!("#{name}")
}
