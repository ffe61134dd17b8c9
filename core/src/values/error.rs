//! Errors raised by value operations.
//!
//! Two kinds exist:
//!
//! - **IrregularValueType**: an operation received an argument (or was invoked on a
//!   receiver) of a type it cannot handle, e.g. a boolean index or an impossible cast.
//! - **NotApplicableOperation**: the operation is undefined for the receiver's variant
//!   or state, e.g. `invert` on a string or `isFirst` on a value without position.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    /// An argument or receiver has a type the operation cannot handle.
    #[error("{message}")]
    IrregularValueType {
        /// Name of the offending type.
        typename: &'static str,
        message: String,
    },

    /// The operation is not defined for this value.
    #[error("{message}")]
    NotApplicableOperation {
        operation: &'static str,
        message: String,
    },
}

impl ValueError {
    pub(crate) fn invalid_index_type(found: &'static str, expected: &str) -> Self {
        ValueError::IrregularValueType {
            typename: found,
            message: format!("Invalid index type: {}. Expected {}", found, expected),
        }
    }

    pub(crate) fn invalid_key_type(found: &'static str) -> Self {
        ValueError::IrregularValueType {
            typename: found,
            message: format!(
                "Invalid key type: {}. Expected boolean, integer, real or string",
                found
            ),
        }
    }

    pub(crate) fn cast(from: &'static str, to: &str) -> Self {
        ValueError::IrregularValueType {
            typename: from,
            message: format!("Value of type {} cannot be cast to {}", from, to),
        }
    }

    pub(crate) fn cast_text(text: &str, to: &str) -> Self {
        ValueError::IrregularValueType {
            typename: "string",
            message: format!("String '{}' cannot be cast to {}", text, to),
        }
    }

    /// The operation exists but not for this type, e.g. `invert` on a string.
    pub(crate) fn not_applicable_for_type(
        operation: &'static str,
        typename: &'static str,
        expected: &str,
    ) -> Self {
        ValueError::NotApplicableOperation {
            operation,
            message: format!(
                "Operation '{}' is not applicable for value type {}. Expected {}",
                operation, typename, expected
            ),
        }
    }

    /// The operation needs metadata this value does not carry.
    pub(crate) fn not_applicable(operation: &'static str) -> Self {
        ValueError::NotApplicableOperation {
            operation,
            message: format!("Operation '{}' is not applicable for this value", operation),
        }
    }

    /// The offending type name, for an irregular value type error.
    pub fn typename(&self) -> Option<&'static str> {
        match self {
            ValueError::IrregularValueType { typename, .. } => Some(*typename),
            ValueError::NotApplicableOperation { .. } => None,
        }
    }

    pub fn is_irregular_value_type(&self) -> bool {
        matches!(self, ValueError::IrregularValueType { .. })
    }

    pub fn is_not_applicable_operation(&self) -> bool {
        matches!(self, ValueError::NotApplicableOperation { .. })
    }
}
