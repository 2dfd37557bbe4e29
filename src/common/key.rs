use aws_sdk_dynamodb::types;
use serde::Serialize;
use serde_dynamo::{Error, Result, to_attribute_value};
use std::collections;

/// Partition key of an item.
///
/// The user table has no sort key, so a single attribute identifies an item.
///
/// ```rust
/// use dynamodb_user_crud::common::key;
///
/// let key = key::Key {
///     name: "email".to_string(),
///     value: "jane@example.com".to_string(),
/// };
/// ```
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Key<T> {
    /// The attribute name of the key.
    pub name: String,
    /// The value of the key.
    pub value: T,
}

impl<T: Serialize> TryFrom<Key<T>> for collections::HashMap<String, types::AttributeValue> {
    type Error = Error;

    fn try_from(key: Key<T>) -> Result<Self> {
        let value = to_attribute_value(key.value)?;
        Ok(Self::from([(key.name, value)]))
    }
}
