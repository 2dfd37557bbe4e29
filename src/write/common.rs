use crate::common;

use std::collections;

/// Internal representation of write operation parameters.
///
/// Holds the rendered condition expression and its attribute name placeholders,
/// ready to be applied to a DynamoDB request builder.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct WriteInput {
    pub(crate) condition_expression: Option<String>,
    pub(crate) expression_attribute_names: Option<collections::HashMap<String, String>>,
    pub(crate) table_name: String,
}

/// Arguments common to all write operations (Put, Delete).
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct WriteArgs {
    /// Condition that must hold for the write to be applied.
    ///
    /// If the condition is false, DynamoDB rejects the write with a conditional check failure.
    pub condition: Option<common::condition::Condition>,
    /// The name of the table to write to.
    pub table_name: String,
}

impl From<WriteArgs> for WriteInput {
    fn from(write_args: WriteArgs) -> Self {
        let (condition_expression, expression_attribute_names) = match write_args.condition {
            Some(condition) => {
                let condition_operation: common::ExpressionInput = condition.into();
                (
                    Some(condition_operation.expression),
                    Some(condition_operation.expression_attribute_names),
                )
            }
            None => (None, None),
        };
        Self {
            condition_expression,
            expression_attribute_names,
            table_name: write_args.table_name,
        }
    }
}

/// apply common write operation settings to a builder
#[macro_export]
macro_rules! apply_write_operation {
    ($builder:expr, $write_operation:expr) => {
        $builder
            .set_condition_expression($write_operation.condition_expression)
            .set_expression_attribute_names($write_operation.expression_attribute_names)
            .table_name($write_operation.table_name)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case::unconditional(
        WriteArgs {
            table_name: "a".to_string(),
            ..Default::default()
        },
        WriteInput {
            table_name: "a".to_string(),
            ..Default::default()
        }
    )]
    #[case::conditional(
        WriteArgs {
            condition: Some(
                common::condition::Condition::NotExists(
                    "b".to_string()
                )
            ),
            table_name: "c".to_string(),
        },
        WriteInput {
            condition_expression: Some(
                "attribute_not_exists(#b)".to_string()
            ),
            expression_attribute_names: Some(
                collections::HashMap::from(
                    [
                        ("#b".to_string(), "b".to_string()),
                    ]
                )
            ),
            table_name: "c".to_string(),
        }
    )]
    fn test_write_args(#[case] args: WriteArgs, #[case] expected: WriteInput) {
        let actual: WriteInput = args.into();
        assert_eq!(actual, expected);
    }
}
