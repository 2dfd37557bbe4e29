use crate::{
    common, read,
    store::{self, Store},
    user::{
        error::UserError,
        record::{EMAIL, User},
    },
    validator, write,
};

/// How create and update decide whether the target user is already stored.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum ExistenceCheck {
    /// Read the user first, then write unconditionally.
    ///
    /// Two concurrent creates of the same email can both pass the read, and the later
    /// put overwrites the earlier one. A failed read counts as "not stored".
    #[default]
    Advisory,
    /// Write with an `attribute_not_exists` / `attribute_exists` condition on the key,
    /// so the check and the write are one atomic operation.
    Conditional,
}

/// The table the user operations run against.
///
/// ```rust
/// use dynamodb_user_crud::user::service::{ExistenceCheck, TableArgs};
///
/// let table = TableArgs {
///     existence_check: ExistenceCheck::Conditional,
///     ..TableArgs::new("users")
/// };
/// ```
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct TableArgs {
    /// Whether point reads are strongly consistent. `None` keeps the table default.
    pub consistent_read: Option<bool>,
    /// Strategy of the create and update existence check.
    pub existence_check: ExistenceCheck,
    /// The name of the user table.
    pub table_name: String,
}

impl TableArgs {
    /// Arguments for `table_name` with the default read and existence check settings.
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            ..Default::default()
        }
    }

    fn write_args(
        &self,
        condition: Option<common::condition::Condition>,
    ) -> write::common::WriteArgs {
        write::common::WriteArgs {
            condition,
            table_name: self.table_name.clone(),
        }
    }
}

/// Fetch the user stored under `email`, `None` if there is none.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(name = "dynamodb_user_crud.fetch_user", skip(store), err)
)]
pub async fn fetch_user<S: Store + ?Sized>(
    email: &str,
    table: &TableArgs,
    store: &S,
) -> Result<Option<User>, UserError> {
    let get_item = read::get_item::GetItem {
        consistent_read: table.consistent_read,
        key: User::key(email),
        table_name: table.table_name.clone(),
    };
    let item = store.get(get_item).await.map_err(UserError::fetch_failed)?;
    item.map(User::from_item)
        .transpose()
        .map_err(UserError::fetch_failed)
}

/// Fetch every stored user, in the order the store yields them.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(name = "dynamodb_user_crud.fetch_users", skip(store), err)
)]
pub async fn fetch_users<S: Store + ?Sized>(
    table: &TableArgs,
    store: &S,
) -> Result<Vec<User>, UserError> {
    let scan = read::scan::Scan {
        consistent_read: table.consistent_read,
        table_name: table.table_name.clone(),
    };
    let items = store.scan(scan).await.map_err(UserError::fetch_failed)?;
    User::from_items(items).map_err(UserError::fetch_failed)
}

/// Store the user decoded from `body`, failing if its email is invalid or already stored.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(name = "dynamodb_user_crud.create_user", skip(store, body), err)
)]
pub async fn create_user<S: Store + ?Sized>(
    body: &str,
    table: &TableArgs,
    store: &S,
) -> Result<User, UserError> {
    let user = User::from_body(body).map_err(UserError::InvalidUserData)?;
    if !validator::is_email_valid(&user.email) {
        return Err(UserError::InvalidEmail);
    }
    let condition = match table.existence_check {
        ExistenceCheck::Advisory => {
            if is_stored(&user.email, table, store).await {
                return Err(UserError::UserAlreadyExists);
            }
            None
        }
        ExistenceCheck::Conditional => {
            Some(common::condition::Condition::NotExists(EMAIL.to_string()))
        }
    };
    let result = put_user(&user, condition, table, store).await;
    match result {
        Err(UserError::PutFailed(store::StoreError::ConditionalCheckFailed)) => {
            Err(UserError::UserAlreadyExists)
        }
        result => result.map(|()| user),
    }
}

/// Replace every field of the stored user with the user decoded from `body`.
///
/// Fields missing from `body` are stored as empty strings.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(name = "dynamodb_user_crud.update_user", skip(store, body), err)
)]
pub async fn update_user<S: Store + ?Sized>(
    body: &str,
    table: &TableArgs,
    store: &S,
) -> Result<User, UserError> {
    let user = User::from_body(body).map_err(UserError::InvalidUserData)?;
    // an empty key addresses no stored user
    if user.email.is_empty() {
        return Err(UserError::UserDoesNotExist);
    }
    let condition = match table.existence_check {
        ExistenceCheck::Advisory => {
            if !is_stored(&user.email, table, store).await {
                return Err(UserError::UserDoesNotExist);
            }
            None
        }
        ExistenceCheck::Conditional => {
            Some(common::condition::Condition::Exists(EMAIL.to_string()))
        }
    };
    let result = put_user(&user, condition, table, store).await;
    match result {
        Err(UserError::PutFailed(store::StoreError::ConditionalCheckFailed)) => {
            Err(UserError::UserDoesNotExist)
        }
        result => result.map(|()| user),
    }
}

/// Delete the user stored under `email`. Deleting an absent user succeeds.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(name = "dynamodb_user_crud.delete_user", skip(store), err)
)]
pub async fn delete_user<S: Store + ?Sized>(
    email: &str,
    table: &TableArgs,
    store: &S,
) -> Result<(), UserError> {
    let delete_item = write::delete_item::DeleteItem {
        key: User::key(email),
        write_args: table.write_args(None),
    };
    store
        .delete(delete_item)
        .await
        .map_err(UserError::DeleteFailed)
}

// a failed lookup counts as not stored
async fn is_stored<S: Store + ?Sized>(email: &str, table: &TableArgs, store: &S) -> bool {
    matches!(
        fetch_user(email, table, store).await,
        Ok(Some(user)) if !user.email.is_empty()
    )
}

async fn put_user<S: Store + ?Sized>(
    user: &User,
    condition: Option<common::condition::Condition>,
    table: &TableArgs,
    store: &S,
) -> Result<(), UserError> {
    let item = user.to_item().map_err(UserError::MarshalFailed)?;
    let put_item = write::put_item::PutItem {
        item,
        write_args: table.write_args(condition),
    };
    store.put(put_item).await.map_err(UserError::PutFailed)
}
