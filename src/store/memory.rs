use crate::{common, read, store, write};

use async_trait::async_trait;
use aws_sdk_dynamodb::types;
use std::{collections, sync};

#[derive(Debug)]
struct Table {
    partition_key: String,
    items: collections::BTreeMap<String, store::Item>,
}

impl Table {
    fn key_value(&self, item: &store::Item) -> Result<String, store::StoreError> {
        match item.get(&self.partition_key) {
            Some(types::AttributeValue::S(value)) if !value.is_empty() => Ok(value.clone()),
            Some(_) => Err(store::StoreError::InvalidKey(format!(
                "`{}` must be a non-empty string",
                self.partition_key
            ))),
            None => Err(store::StoreError::InvalidKey(format!(
                "missing partition key `{}`",
                self.partition_key
            ))),
        }
    }

    fn resolve_key(&self, key: common::key::Key<String>) -> Result<String, store::StoreError> {
        if key.name != self.partition_key {
            return Err(store::StoreError::InvalidKey(format!(
                "`{}` is not the partition key `{}`",
                key.name, self.partition_key
            )));
        }
        let item: store::Item = key.try_into()?;
        self.key_value(&item)
    }

    fn check(
        &self,
        condition: Option<&common::condition::Condition>,
        key: &str,
    ) -> Result<(), store::StoreError> {
        match condition {
            Some(condition) if !condition.is_satisfied_by(self.items.get(key)) => {
                Err(store::StoreError::ConditionalCheckFailed)
            }
            _ => Ok(()),
        }
    }
}

/// In-process [`store::Store`] with DynamoDB semantics for single-key tables.
///
/// Tables must be created before use, keys must be non-empty strings and scans yield
/// items in key order. One instance can be shared by concurrent callers.
///
/// ```rust
/// use dynamodb_user_crud::store::memory::MemoryStore;
///
/// let store = MemoryStore::new().with_table("users", "email");
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: sync::Mutex<collections::HashMap<String, Table>>,
}

impl MemoryStore {
    /// An empty store without tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a table and return the store.
    pub fn with_table(self, name: impl Into<String>, partition_key: impl Into<String>) -> Self {
        self.create_table(name, partition_key);
        self
    }

    /// Add a table keyed by `partition_key`. An existing table of the same name is emptied.
    pub fn create_table(&self, name: impl Into<String>, partition_key: impl Into<String>) {
        let table = Table {
            partition_key: partition_key.into(),
            items: collections::BTreeMap::new(),
        };
        self.lock().insert(name.into(), table);
    }

    /// Number of items stored in a table, `None` if the table does not exist.
    pub fn item_count(&self, table_name: &str) -> Option<usize> {
        self.lock().get(table_name).map(|table| table.items.len())
    }

    fn lock(&self) -> sync::MutexGuard<'_, collections::HashMap<String, Table>> {
        self.tables.lock().unwrap_or_else(sync::PoisonError::into_inner)
    }

    fn on_table<R>(
        &self,
        table_name: &str,
        operation: impl FnOnce(&mut Table) -> Result<R, store::StoreError>,
    ) -> Result<R, store::StoreError> {
        let mut tables = self.lock();
        let table = tables
            .get_mut(table_name)
            .ok_or_else(|| store::StoreError::TableNotFound(table_name.to_string()))?;
        operation(table)
    }
}

#[async_trait]
impl store::Store for MemoryStore {
    async fn get(
        &self,
        get_item: read::get_item::GetItem<String>,
    ) -> Result<Option<store::Item>, store::StoreError> {
        self.on_table(&get_item.table_name, |table| {
            let key = table.resolve_key(get_item.key)?;
            Ok(table.items.get(&key).cloned())
        })
    }

    async fn scan(&self, scan: read::scan::Scan) -> Result<Vec<store::Item>, store::StoreError> {
        self.on_table(&scan.table_name, |table| {
            Ok(table.items.values().cloned().collect())
        })
    }

    async fn put(&self, put_item: write::put_item::PutItem) -> Result<(), store::StoreError> {
        let write_args = put_item.write_args;
        self.on_table(&write_args.table_name, |table| {
            let key = table.key_value(&put_item.item)?;
            table.check(write_args.condition.as_ref(), &key)?;
            table.items.insert(key, put_item.item);
            Ok(())
        })
    }

    async fn delete(
        &self,
        delete_item: write::delete_item::DeleteItem<String>,
    ) -> Result<(), store::StoreError> {
        let write_args = delete_item.write_args;
        self.on_table(&write_args.table_name, |table| {
            let key = table.resolve_key(delete_item.key)?;
            table.check(write_args.condition.as_ref(), &key)?;
            table.items.remove(&key);
            Ok(())
        })
    }
}
