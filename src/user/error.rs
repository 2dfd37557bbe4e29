use crate::store;

use thiserror::Error;

/// Every way a user operation can fail.
///
/// Errors are returned to the caller as they happen; none is retried. Mapping them to
/// transport status codes is left to the caller.
#[derive(Debug, Error)]
pub enum UserError {
    /// The request body is not a user.
    #[error("invalid user data")]
    InvalidUserData(#[source] serde_json::Error),
    /// The email fails the syntax check.
    #[error("invalid email")]
    InvalidEmail,
    /// A user with this email is already stored.
    #[error("user already exists")]
    UserAlreadyExists,
    /// No user with this email is stored.
    #[error("user does not exist")]
    UserDoesNotExist,
    /// The user could not be encoded into a table item.
    #[error("could not marshal item")]
    MarshalFailed(#[source] serde_dynamo::Error),
    /// The table read failed or returned an item that is not a user.
    #[error("failed to fetch record")]
    FetchFailed(#[source] store::BoxError),
    /// The table write failed.
    #[error("could not put item")]
    PutFailed(#[source] store::StoreError),
    /// The table delete failed.
    #[error("could not delete item")]
    DeleteFailed(#[source] store::StoreError),
    /// The transport received a method it does not dispatch.
    #[error("method not allowed")]
    MethodNotAllowed,
}

impl UserError {
    pub(crate) fn fetch_failed(error: impl Into<store::BoxError>) -> Self {
        Self::FetchFailed(error.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;
    use std::error::Error as _;

    #[rstest]
    #[case::invalid_email(UserError::InvalidEmail, "invalid email")]
    #[case::already_exists(UserError::UserAlreadyExists, "user already exists")]
    #[case::does_not_exist(UserError::UserDoesNotExist, "user does not exist")]
    #[case::method_not_allowed(UserError::MethodNotAllowed, "method not allowed")]
    #[case::fetch_failed(
        UserError::fetch_failed(store::StoreError::TableNotFound("users".to_string())),
        "failed to fetch record"
    )]
    #[case::put_failed(
        UserError::PutFailed(store::StoreError::ConditionalCheckFailed),
        "could not put item"
    )]
    #[case::delete_failed(
        UserError::DeleteFailed(store::StoreError::InvalidKey("email".to_string())),
        "could not delete item"
    )]
    fn test_message(#[case] error: UserError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[test]
    fn test_source_is_kept() {
        let error = UserError::fetch_failed(store::StoreError::TableNotFound("users".to_string()));
        let source = error.source().map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("table not found: users"));
    }
}
