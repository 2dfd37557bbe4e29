use crate::common;

use aws_sdk_dynamodb::types;
use std::collections;

/// Existence condition checked by DynamoDB before a write is applied.
///
/// ```rust
/// use dynamodb_user_crud::common::condition;
///
/// let create_only = condition::Condition::NotExists("email".to_string());
/// let replace_only = condition::Condition::Exists("email".to_string());
/// ```
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Condition {
    /// The stored item must have the attribute, so the item must already exist.
    Exists(String),
    /// The stored item must not have the attribute, so the item must be new.
    NotExists(String),
}

impl Condition {
    /// The attribute the condition is about.
    pub fn name(&self) -> &str {
        match self {
            Self::Exists(name) | Self::NotExists(name) => name,
        }
    }

    /// Evaluate the condition against the item currently stored under the written key.
    pub fn is_satisfied_by(
        &self,
        current: Option<&collections::HashMap<String, types::AttributeValue>>,
    ) -> bool {
        let has_attribute = current.is_some_and(|item| item.contains_key(self.name()));
        match self {
            Self::Exists(_) => has_attribute,
            Self::NotExists(_) => !has_attribute,
        }
    }
}

impl From<Condition> for common::ExpressionInput {
    fn from(condition: Condition) -> Self {
        let (function, name) = match condition {
            Condition::Exists(name) => ("attribute_exists", name),
            Condition::NotExists(name) => ("attribute_not_exists", name),
        };
        let placeholder = common::placeholder(&name);
        Self {
            expression: format!("{function}({placeholder})"),
            expression_attribute_names: collections::HashMap::from([(placeholder, name)]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case::exists(
        Condition::Exists("email".to_string()),
        common::ExpressionInput {
            expression: "attribute_exists(#email)".to_string(),
            expression_attribute_names: collections::HashMap::from(
                [
                    ("#email".to_string(), "email".to_string()),
                ]
            ),
        }
    )]
    #[case::not_exists(
        Condition::NotExists("email".to_string()),
        common::ExpressionInput {
            expression: "attribute_not_exists(#email)".to_string(),
            expression_attribute_names: collections::HashMap::from(
                [
                    ("#email".to_string(), "email".to_string()),
                ]
            ),
        }
    )]
    fn test_condition_expression(
        #[case] condition: Condition,
        #[case] expected: common::ExpressionInput,
    ) {
        let actual: common::ExpressionInput = condition.into();
        assert_eq!(actual, expected);
    }

    #[rstest]
    #[case::exists_absent(Condition::Exists("email".to_string()), None, false)]
    #[case::exists_present(
        Condition::Exists("email".to_string()),
        Some(
            collections::HashMap::from(
                [(
                    "email".to_string(),
                    types::AttributeValue::S(
                        "a@b.co".to_string()
                    ),
                )]
            )
        ),
        true
    )]
    #[case::not_exists_absent(Condition::NotExists("email".to_string()), None, true)]
    #[case::not_exists_present(
        Condition::NotExists("email".to_string()),
        Some(
            collections::HashMap::from(
                [(
                    "email".to_string(),
                    types::AttributeValue::S(
                        "a@b.co".to_string()
                    ),
                )]
            )
        ),
        false
    )]
    fn test_condition_is_satisfied_by(
        #[case] condition: Condition,
        #[case] current: Option<collections::HashMap<String, types::AttributeValue>>,
        #[case] expected: bool,
    ) {
        assert_eq!(condition.is_satisfied_by(current.as_ref()), expected);
    }
}
