//! Storage seam between the user service and the table it persists to.
//!
//! [`Store`] is the capability the service needs: point get, full scan, put and delete by key.
//! [`dynamo::DynamoStore`] implements it over the AWS SDK client and
//! [`memory::MemoryStore`] keeps tables in process for tests and local runs.

/// DynamoDB backed store.
pub mod dynamo;

/// In-process store.
pub mod memory;

use crate::{read, write};

use async_trait::async_trait;
use aws_sdk_dynamodb::types;
use std::collections;
use thiserror::Error;

/// An item as stored in the table: attribute name to attribute value.
pub type Item = collections::HashMap<String, types::AttributeValue>;

/// Type-erased error of the underlying client.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors returned by a [`Store`].
#[derive(Debug, Error)]
pub enum StoreError {
    /// The condition attached to a write did not hold.
    #[error("the conditional request failed")]
    ConditionalCheckFailed,
    /// The key could not be converted into DynamoDB attributes.
    #[error("could not encode key: {0}")]
    Encode(#[from] serde_dynamo::Error),
    /// The key does not address an item of the table.
    #[error("invalid key: {0}")]
    InvalidKey(String),
    /// The client request failed.
    #[error("request failed: {0}")]
    Request(#[source] BoxError),
    /// The table does not exist.
    #[error("table not found: {0}")]
    TableNotFound(String),
}

impl StoreError {
    pub(crate) fn request(error: impl Into<BoxError>) -> Self {
        Self::Request(error.into())
    }
}

/// A key-value table keyed by a unique string attribute.
///
/// Every method performs exactly one atomic operation; nothing is composed across calls.
#[async_trait]
pub trait Store: Send + Sync {
    /// Read one item, `None` when the key is not stored.
    async fn get(
        &self,
        get_item: read::get_item::GetItem<String>,
    ) -> Result<Option<Item>, StoreError>;

    /// Read every item of the table, in no particular order.
    async fn scan(&self, scan: read::scan::Scan) -> Result<Vec<Item>, StoreError>;

    /// Insert or replace an item.
    ///
    /// Fails with [`StoreError::ConditionalCheckFailed`] when the attached condition does not hold.
    async fn put(&self, put_item: write::put_item::PutItem) -> Result<(), StoreError>;

    /// Remove an item. Removing a key that is not stored succeeds.
    async fn delete(
        &self,
        delete_item: write::delete_item::DeleteItem<String>,
    ) -> Result<(), StoreError>;
}
