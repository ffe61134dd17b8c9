//! Expression evaluation errors.
//!
//! Value operations report [`ValueError`]s, which pass through unchanged. The
//! remaining variants come from the evaluator itself: name lookup, method
//! dispatch and the depth limit.

use crate::values::ValueError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// A value operation failed.
    #[error(transparent)]
    Value(#[from] ValueError),

    #[error("Undefined variable '{name}'")]
    UndefinedVariable { name: String },

    #[error("Unknown operation '{method}'")]
    UnknownOperation { method: String },

    #[error("Operation '{method}' expects {expected} argument(s), found {found}")]
    ArgumentCount {
        method: String,
        expected: usize,
        found: usize,
    },

    /// Evaluation recursion depth exceeded.
    #[error("Evaluation depth {depth} exceeds maximum of {max_depth}")]
    StackOverflow { depth: usize, max_depth: usize },
}

impl EvalError {
    pub fn code(&self) -> &'static str {
        match self {
            EvalError::Value(ValueError::IrregularValueType { .. }) => "R001",
            EvalError::Value(ValueError::NotApplicableOperation { .. }) => "R002",
            EvalError::UndefinedVariable { .. } => "R003",
            EvalError::UnknownOperation { .. } | EvalError::ArgumentCount { .. } => "R004",
            EvalError::StackOverflow { .. } => "R005",
        }
    }

    pub fn help(&self) -> Option<String> {
        match self {
            EvalError::UndefinedVariable { name } => Some(format!(
                "Pass '{}' in the render bindings or register it on the engine",
                name
            )),
            EvalError::StackOverflow { .. } => {
                Some("Simplify the expression or raise ExecutionOptions::max_depth".to_string())
            }
            _ => None,
        }
    }
}
