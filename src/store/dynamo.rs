use crate::{read, store, write};

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;

/// [`store::Store`] backed by Amazon DynamoDB.
///
/// ```rust,no_run
/// use dynamodb_user_crud::store::dynamo::DynamoStore;
///
/// # fn example(config: &aws_sdk_dynamodb::config::Config) {
/// let store = DynamoStore::new(aws_sdk_dynamodb::Client::from_conf(config.clone()));
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct DynamoStore {
    client: Client,
}

impl DynamoStore {
    /// Wrap an already configured client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// The wrapped client.
    pub fn client(&self) -> &Client {
        &self.client
    }
}

impl From<Client> for DynamoStore {
    fn from(client: Client) -> Self {
        Self::new(client)
    }
}

#[async_trait]
impl store::Store for DynamoStore {
    async fn get(
        &self,
        get_item: read::get_item::GetItem<String>,
    ) -> Result<Option<store::Item>, store::StoreError> {
        let output = get_item
            .send(&self.client)
            .await
            .map_err(store::StoreError::request)?;
        Ok(output.item)
    }

    async fn scan(&self, scan: read::scan::Scan) -> Result<Vec<store::Item>, store::StoreError> {
        scan.send(&self.client)
            .await
            .map_err(store::StoreError::request)
    }

    async fn put(&self, put_item: write::put_item::PutItem) -> Result<(), store::StoreError> {
        match put_item.send(&self.client).await {
            Ok(_) => Ok(()),
            Err(error)
                if error
                    .as_service_error()
                    .is_some_and(|error| error.is_conditional_check_failed_exception()) =>
            {
                Err(store::StoreError::ConditionalCheckFailed)
            }
            Err(error) => Err(store::StoreError::request(error)),
        }
    }

    async fn delete(
        &self,
        delete_item: write::delete_item::DeleteItem<String>,
    ) -> Result<(), store::StoreError> {
        match delete_item.send(&self.client).await {
            Ok(_) => Ok(()),
            Err(error)
                if error
                    .as_service_error()
                    .is_some_and(|error| error.is_conditional_check_failed_exception()) =>
            {
                Err(store::StoreError::ConditionalCheckFailed)
            }
            Err(error) => Err(store::StoreError::request(error)),
        }
    }
}
