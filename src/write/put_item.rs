use crate::write;

use aws_sdk_dynamodb::{Client, error, operation, types};
use std::collections;

/// put item operation
#[derive(Debug, PartialEq)]
struct PutItemInput {
    item: collections::HashMap<String, types::AttributeValue>,
    write_operation: write::common::WriteInput,
}

/// Put item operation.
///
/// The item is already in DynamoDB attribute form, so building the request cannot fail.
///
/// ```rust,no_run
/// use aws_sdk_dynamodb::{Client, types};
/// use dynamodb_user_crud::{common, write};
/// use std::collections;
///
/// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
/// let put_item = write::put_item::PutItem {
///     item: collections::HashMap::from([(
///         "email".to_string(),
///         types::AttributeValue::S("jane@example.com".to_string()),
///     )]),
///     write_args: write::common::WriteArgs {
///         condition: Some(common::condition::Condition::NotExists("email".to_string())),
///         table_name: "users".to_string(),
///     },
/// };
/// put_item.send(client).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PutItem {
    /// The item to put into the table.
    pub item: collections::HashMap<String, types::AttributeValue>,
    /// Additional write operation arguments (table name, condition).
    pub write_args: write::common::WriteArgs,
}

impl From<PutItem> for PutItemInput {
    fn from(put_item: PutItem) -> Self {
        Self {
            item: put_item.item,
            write_operation: put_item.write_args.into(),
        }
    }
}

impl PutItem {
    /// Execute the put item operation.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "dynamodb_user_crud.put_item",
            skip(self, client),
            fields(table_name = %self.write_args.table_name),
            err
        )
    )]
    pub async fn send(
        self,
        client: &Client,
    ) -> Result<
        operation::put_item::PutItemOutput,
        error::SdkError<operation::put_item::PutItemError>,
    > {
        let put_item: PutItemInput = self.into();
        let builder = client.put_item().set_item(Some(put_item.item));
        crate::apply_write_operation!(builder, put_item.write_operation)
            .send()
            .await
    }
}
