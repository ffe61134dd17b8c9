//! Core evaluation logic.

use crate::{
    api::ExecutionOptions,
    evaluator::{
        EvalError,
        operators::{call_method, eval_comparison, eval_unary},
    },
    expression::Bindings,
    parser::{BoolOp, Expr, Literal},
    values::Value,
};

/// Tree-walking interpreter for one evaluation.
pub(super) struct Interpreter<'a> {
    options: &'a ExecutionOptions,
    globals: &'a Bindings,
    variables: &'a Bindings,
    depth: usize,
}

impl<'a> Interpreter<'a> {
    pub(super) fn new(
        options: &'a ExecutionOptions,
        globals: &'a Bindings,
        variables: &'a Bindings,
    ) -> Self {
        Self {
            options,
            globals,
            variables,
            depth: 0,
        }
    }

    /// Evaluate an expression node.
    pub(super) fn eval_expr(&mut self, expr: &Expr) -> Result<Value, EvalError> {
        // Check depth before recursing
        if self.depth >= self.options.max_depth {
            return Err(EvalError::StackOverflow {
                depth: self.depth,
                max_depth: self.options.max_depth,
            });
        }

        self.depth += 1;
        let result = self.eval_expr_inner(expr);
        self.depth -= 1;

        result
    }

    /// Inner evaluation logic (no depth tracking).
    fn eval_expr_inner(&mut self, expr: &Expr) -> Result<Value, EvalError> {
        match expr {
            Expr::Literal(literal) => Ok(match literal {
                Literal::Void => Value::VOID,
                Literal::Boolean(b) => Value::Boolean(*b),
                Literal::Integer(i) => Value::Integer(*i),
                Literal::Real(r) => Value::Real(*r),
                Literal::String(s) => Value::string(s.as_str()),
            }),

            // Per-call variables shadow engine globals.
            Expr::Ident(name) => self
                .variables
                .get(name)
                .or_else(|| self.globals.get(name))
                .cloned()
                .ok_or_else(|| EvalError::UndefinedVariable { name: name.clone() }),

            Expr::List(items) => {
                let values = items
                    .iter()
                    .map(|item| self.eval_expr(item))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Value::list(values))
            }

            Expr::Map(entries) => {
                let mut pairs = Vec::with_capacity(entries.len());
                for (key, value) in entries {
                    pairs.push((self.eval_expr(key)?, self.eval_expr(value)?));
                }
                Ok(Value::map(pairs))
            }

            Expr::Unary { op, expr } => {
                let value = self.eval_expr(expr)?;
                eval_unary(*op, &value)
            }

            Expr::Boolean { op, left, right } => {
                let left = self.eval_expr(left)?.as_boolean()?;

                // Short-circuit evaluation
                match op {
                    BoolOp::And if !left => Ok(Value::Boolean(false)),
                    BoolOp::Or if left => Ok(Value::Boolean(true)),
                    _ => Ok(Value::Boolean(self.eval_expr(right)?.as_boolean()?)),
                }
            }

            Expr::Comparison { op, left, right } => {
                let left = self.eval_expr(left)?;
                let right = self.eval_expr(right)?;
                Ok(eval_comparison(*op, &left, &right))
            }

            Expr::Index { value, index } => {
                let value = self.eval_expr(value)?;
                let index = self.eval_expr(index)?;
                Ok(value.fetch(&index)?)
            }

            Expr::Field { value, field } => {
                let value = self.eval_expr(value)?;
                Ok(value.fetch(&Value::string(field.as_str()))?)
            }

            Expr::Call {
                receiver,
                method,
                args,
            } => {
                let receiver = self.eval_expr(receiver)?;
                let args = args
                    .iter()
                    .map(|arg| self.eval_expr(arg))
                    .collect::<Result<Vec<_>, _>>()?;
                call_method(&receiver, method, &args)
            }
        }
    }
}
