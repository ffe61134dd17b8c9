//! Tree-walking evaluator for template expressions.
//!
//! The evaluator interprets parsed expressions (`Expr`) and produces runtime values (`Value`).
//!
//! ## Design Principles
//!
//! - **Never panic**: All adversarial inputs must be handled gracefully
//! - **Stack-safe**: Depth tracking prevents stack overflow from deeply nested expressions
//! - **Read-only**: Bindings are never modified and evaluation has no side effects
//!
//! ## Example
//!
//! ```
//! use stencil_core::{evaluator, parser, expression::Bindings, values::Value};
//!
//! let expr = parser::parse_statement("name.isBlank()", &Default::default()).unwrap();
//! let mut bindings = Bindings::new();
//! bindings.insert("name".to_string(), Value::string("  "));
//!
//! let result = evaluator::eval(&expr, &bindings).unwrap();
//! assert_eq!(result, Value::boolean(true));
//! ```

mod error;
mod eval;
mod operators;

#[cfg(test)]
mod eval_test;

pub use error::EvalError;

use crate::{
    api::ExecutionOptions,
    expression::{Bindings, Expression, ExpressionEvaluator},
    parser::Expr,
    values::Value,
};

/// Evaluate an expression with default limits and no globals.
pub fn eval(expr: &Expr, variables: &Bindings) -> Result<Value, EvalError> {
    eval_with_limits(expr, &Bindings::new(), variables, &ExecutionOptions::default())
}

/// Evaluate an expression that references no variables.
pub fn eval_constant(expr: &Expr) -> Result<Value, EvalError> {
    eval(expr, &Bindings::new())
}

/// Evaluate an expression with custom limits.
///
/// Names are looked up in `variables` first, then in `globals`.
pub fn eval_with_limits(
    expr: &Expr,
    globals: &Bindings,
    variables: &Bindings,
    options: &ExecutionOptions,
) -> Result<Value, EvalError> {
    eval::Interpreter::new(options, globals, variables).eval_expr(expr)
}

/// The built-in [`ExpressionEvaluator`].
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    options: ExecutionOptions,
    globals: Bindings,
}

impl Evaluator {
    pub fn new(options: ExecutionOptions, globals: Bindings) -> Self {
        Self { options, globals }
    }

    pub fn globals(&self) -> &Bindings {
        &self.globals
    }
}

impl ExpressionEvaluator for Evaluator {
    fn evaluate(&self, expression: &Expression, bindings: &Bindings) -> Result<Value, EvalError> {
        tracing::trace!(statement = expression.statement(), "Evaluating expression");
        eval_with_limits(expression.condition(), &self.globals, bindings, &self.options)
    }
}
