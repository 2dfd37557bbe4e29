use aws_sdk_dynamodb::{Client, error, operation, types};
use std::collections;

/// scan operation
#[derive(Clone, Debug, Default, PartialEq)]
struct ScanInput {
    consistent_read: Option<bool>,
    table_name: String,
}

/// Scan operation.
///
/// Every page is fetched before returning, so the output holds the whole table.
///
/// ```rust,no_run
/// use aws_sdk_dynamodb::Client;
/// use dynamodb_user_crud::read;
///
/// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
/// let scan = read::scan::Scan {
///     table_name: "users".to_string(),
///     ..Default::default()
/// };
/// let items = scan.send(client).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Scan {
    /// Whether to use a strongly consistent read.
    pub consistent_read: Option<bool>,
    /// The name of the table to scan.
    pub table_name: String,
}

impl From<Scan> for ScanInput {
    fn from(scan: Scan) -> Self {
        Self {
            consistent_read: scan.consistent_read,
            table_name: scan.table_name,
        }
    }
}

impl Scan {
    /// Execute the scan operation, following pagination until the table is exhausted.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "dynamodb_user_crud.scan",
            skip(self, client),
            fields(table_name = %self.table_name),
            err
        )
    )]
    pub async fn send(
        self,
        client: &Client,
    ) -> Result<
        Vec<collections::HashMap<String, types::AttributeValue>>,
        error::SdkError<operation::scan::ScanError>,
    > {
        let scan: ScanInput = self.into();
        let mut paginator = client
            .scan()
            .set_consistent_read(scan.consistent_read)
            .table_name(scan.table_name)
            .into_paginator()
            .send();
        let mut items = Vec::new();
        while let Some(page) = paginator.next().await {
            if let Some(page_items) = page?.items {
                items.extend(page_items);
            }
        }
        Ok(items)
    }
}
