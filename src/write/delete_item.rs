use crate::{common, write};

use aws_sdk_dynamodb::{Client, error, operation, types};
use serde::Serialize;
use serde_dynamo::{Error, Result};
use std::collections;

/// delete item operation
#[derive(Debug, PartialEq)]
struct DeleteItemInput {
    keys: collections::HashMap<String, types::AttributeValue>,
    write_operation: write::common::WriteInput,
}

/// Delete item operation.
///
/// Deleting a key that is not stored succeeds unless a condition is attached.
///
/// ```rust,no_run
/// use aws_sdk_dynamodb::Client;
/// use dynamodb_user_crud::{common, write};
///
/// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
/// let delete_item = write::delete_item::DeleteItem {
///     key: common::key::Key {
///         name: "email".to_string(),
///         value: "jane@example.com".to_string(),
///     },
///     write_args: write::common::WriteArgs {
///         table_name: "users".to_string(),
///         ..Default::default()
///     },
/// };
/// delete_item.send(client).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DeleteItem<T> {
    /// The partition key of the item to delete.
    pub key: common::key::Key<T>,
    /// Additional write operation arguments (table name, condition).
    pub write_args: write::common::WriteArgs,
}

impl<T: Serialize> TryFrom<DeleteItem<T>> for DeleteItemInput {
    type Error = Error;

    fn try_from(delete_item: DeleteItem<T>) -> Result<Self> {
        let keys = delete_item.key.try_into()?;
        let operation = Self {
            keys,
            write_operation: delete_item.write_args.into(),
        };
        Ok(operation)
    }
}

impl<T: Serialize> DeleteItem<T> {
    /// Execute the delete item operation.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "dynamodb_user_crud.delete_item",
            skip(self, client),
            fields(table_name = %self.write_args.table_name),
            err
        )
    )]
    pub async fn send(
        self,
        client: &Client,
    ) -> Result<
        operation::delete_item::DeleteItemOutput,
        error::SdkError<operation::delete_item::DeleteItemError>,
    > {
        let delete_item: DeleteItemInput = self.try_into().map_err(error::BuildError::other)?;
        let builder = client.delete_item().set_key(Some(delete_item.keys));
        crate::apply_write_operation!(builder, delete_item.write_operation)
            .send()
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;
    use serde_json::Value;

    #[rstest]
    #[case::empty(
        DeleteItem {
            key: common::key::Key {
                name: "a".to_string(),
                value: Value::String(
                    "b".to_string()
                ),
            },
            write_args: write::common::WriteArgs {
                table_name: "c".to_string(),
                ..Default::default()
            },
        },
        DeleteItemInput {
            keys: collections::HashMap::from(
                [
                    (
                        "a".to_string(),
                        types::AttributeValue::S(
                            "b".to_string()
                        )
                    ),
                ]
            ),
            write_operation: write::common::WriteInput {
                table_name: "c".to_string(),
                ..Default::default()
            },
        }
    )]
    #[case::must_exist(
        DeleteItem {
            key: common::key::Key {
                name: "email".to_string(),
                value: Value::String(
                    "a@b.co".to_string()
                ),
            },
            write_args: write::common::WriteArgs {
                condition: Some(
                    common::condition::Condition::Exists(
                        "email".to_string()
                    )
                ),
                table_name: "users".to_string(),
            },
        },
        DeleteItemInput {
            keys: collections::HashMap::from(
                [
                    (
                        "email".to_string(),
                        types::AttributeValue::S(
                            "a@b.co".to_string()
                        )
                    ),
                ]
            ),
            write_operation: write::common::WriteInput {
                condition_expression: Some(
                    "attribute_exists(#email)".to_string()
                ),
                expression_attribute_names: Some(
                    collections::HashMap::from(
                        [
                            ("#email".to_string(), "email".to_string()),
                        ]
                    )
                ),
                table_name: "users".to_string(),
            },
        }
    )]
    fn test_delete_item(#[case] args: DeleteItem<Value>, #[case] expected: DeleteItemInput) {
        let actual: DeleteItemInput = args.try_into().unwrap();
        assert_eq!(actual, expected);
    }
}
