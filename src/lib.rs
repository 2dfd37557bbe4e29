#![deny(missing_docs)]
#![deny(warnings)]

//! # DynamoDB User CRUD
//!
//! Create, fetch, update and delete user records kept in a DynamoDB table.
//!
//! ## Overview
//!
//! A user is an email address (the partition key) with a first and last name.
//! The five operations in [`user::service`] each turn a request payload into one table read
//! or write:
//! - [`user::service::fetch_user`] and [`user::service::fetch_users`] read one or all users
//! - [`user::service::create_user`] validates the email and refuses to overwrite a stored user
//! - [`user::service::update_user`] replaces a stored user as a whole
//! - [`user::service::delete_user`] removes a user, stored or not
//!
//! Every operation takes the table and the [`store::Store`] explicitly, so the DynamoDB client
//! can be swapped for the in-process [`store::memory::MemoryStore`].
//!
//! ## Quick Example
//!
//! ```no_run
//! use aws_sdk_dynamodb::Client;
//! use dynamodb_user_crud::{store, user};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! # let client = Client::from_conf(aws_sdk_dynamodb::config::Config::builder().build());
//! let store = store::dynamo::DynamoStore::new(client);
//! let table = user::service::TableArgs {
//!     // check and write in one conditional put instead of a read then a put
//!     existence_check: user::service::ExistenceCheck::Conditional,
//!     ..user::service::TableArgs::new("users")
//! };
//! let body = r#"{"email":"jane@example.com","firstName":"Jane","lastName":"Doe"}"#;
//! let created = user::service::create_user(body, &table, &store).await?;
//! let fetched = user::service::fetch_user(&created.email, &table, &store).await?;
//! assert_eq!(fetched, Some(created));
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`mod@common`] - Partition keys and write conditions
//! - [`mod@read`] - Read operations (GetItem, Scan)
//! - [`mod@write`] - Write operations (PutItem, DeleteItem)
//! - [`mod@store`] - The store seam and its DynamoDB and in-memory implementations
//! - [`mod@user`] - The user record, its errors and operations
//! - [`mod@validator`] - Email syntax check

/// Common utilities for keys and write conditions.
pub mod common;

/// Read operations for retrieving data from DynamoDB tables.
pub mod read;

/// Storage seam used by the user operations.
pub mod store;

/// The user resource.
pub mod user;

/// Email syntax validation.
pub mod validator;

/// Write operations for modifying data in DynamoDB tables.
pub mod write;
