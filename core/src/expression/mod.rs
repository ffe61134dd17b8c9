//! Expressions embedded in template markers.
//!
//! An [`Expression`] keeps the statement text it was parsed from together with
//! its parsed form. Evaluation goes through the [`ExpressionEvaluator`] trait so
//! the resolver does not depend on a particular interpreter.

use crate::api::ParseOptions;
use crate::evaluator::EvalError;
use crate::parser::{Expr, ParseError, Span, parse_statement};
use crate::values::Value;
use ecow::EcoString;

/// Variable bindings supplied per render call.
pub type Bindings = hashbrown::HashMap<String, Value>;

/// A parsed, read-only expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    statement: EcoString,
    condition: Expr,
    span: Span,
}

impl Expression {
    pub fn new(statement: impl Into<EcoString>, condition: Expr, span: Span) -> Self {
        Self {
            statement: statement.into(),
            condition,
            span,
        }
    }

    /// Parses a standalone statement.
    pub fn parse(statement: &str, options: &ParseOptions) -> Result<Self, ParseError> {
        let condition = parse_statement(statement, options)?;
        Ok(Self::new(statement, condition, Span::new(0, statement.len())))
    }

    /// The source text of the statement.
    pub fn statement(&self) -> &str {
        &self.statement
    }

    /// The parsed form of the statement.
    pub fn condition(&self) -> &Expr {
        &self.condition
    }

    /// Location of the statement in the template source.
    pub fn span(&self) -> &Span {
        &self.span
    }

    pub fn evaluate(
        &self,
        evaluator: &dyn ExpressionEvaluator,
        bindings: &Bindings,
    ) -> Result<Value, EvalError> {
        evaluator.evaluate(self, bindings)
    }
}

/// Capability to evaluate an [`Expression`] against variable bindings.
pub trait ExpressionEvaluator: Send + Sync {
    fn evaluate(&self, expression: &Expression, bindings: &Bindings) -> Result<Value, EvalError>;
}

/// Checks that `statement` is a syntactically valid expression.
///
/// This only checks the built-in grammar. A custom [`ExpressionEvaluator`]
/// may accept statements this rejects, or fail on statements this accepts.
pub fn validate_expression(statement: &str) -> Result<(), ParseError> {
    parse_statement(statement, &ParseOptions::default()).map(|_| ())
}
