use crate::{common, store};

use serde::{Deserialize, Serialize};

/// Name of the partition key attribute of the user table.
pub const EMAIL: &str = "email";

/// A user, identified by its email address.
///
/// Both the JSON body and the stored item use the field names `email`, `firstName` and
/// `lastName`. Missing fields decode to empty strings and unknown fields are ignored.
///
/// ```rust
/// use dynamodb_user_crud::user::record::User;
///
/// let user = User::from_body(r#"{"email":"jane@example.com","firstName":"Jane"}"#).unwrap();
/// assert_eq!(user.last_name, "");
/// ```
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct User {
    /// Email address, the partition key.
    pub email: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
}

impl User {
    /// Decode a request body.
    pub fn from_body(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }

    /// Decode a stored item.
    pub fn from_item(item: store::Item) -> Result<Self, serde_dynamo::Error> {
        serde_dynamo::from_item(item)
    }

    /// Decode the items returned by a scan.
    pub fn from_items(items: Vec<store::Item>) -> Result<Vec<Self>, serde_dynamo::Error> {
        items.into_iter().map(Self::from_item).collect()
    }

    /// Encode into a storable item.
    pub fn to_item(&self) -> Result<store::Item, serde_dynamo::Error> {
        serde_dynamo::to_item(self)
    }

    /// The table key addressing the user with this email.
    pub fn key(email: &str) -> common::key::Key<String> {
        common::key::Key {
            name: EMAIL.to_string(),
            value: email.to_string(),
        }
    }
}
