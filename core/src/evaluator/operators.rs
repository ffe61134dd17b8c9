//! Operator and method implementations.
//!
//! Methods map one-to-one onto [`Value`] operations; the evaluator only checks
//! arity and wraps native results back into values.

use crate::{
    evaluator::EvalError,
    parser::{ComparisonOp, UnaryOp},
    values::{Value, ValueError},
};

pub(super) fn eval_unary(op: UnaryOp, value: &Value) -> Result<Value, EvalError> {
    match op {
        UnaryOp::Not => Ok(Value::Boolean(!value.as_boolean()?)),
        UnaryOp::Neg => match value.origin() {
            Value::Integer(_) | Value::Real(_) => Ok(value.invert()?),
            other => Err(ValueError::not_applicable_for_type(
                "negate",
                other.typename(),
                "integer or real",
            )
            .into()),
        },
    }
}

pub(super) fn eval_comparison(op: ComparisonOp, left: &Value, right: &Value) -> Value {
    match op {
        ComparisonOp::Eq => Value::Boolean(left == right),
        ComparisonOp::Neq => Value::Boolean(left != right),
    }
}

/// Invoke `method` on `receiver`.
pub(super) fn call_method(
    receiver: &Value,
    method: &str,
    args: &[Value],
) -> Result<Value, EvalError> {
    let value = match method {
        "isVoid" => {
            arity(method, args, 0)?;
            Value::Boolean(receiver.is_void())
        }
        "isEmpty" => {
            arity(method, args, 0)?;
            Value::Boolean(receiver.is_empty()?)
        }
        "isBlank" => {
            arity(method, args, 0)?;
            Value::Boolean(receiver.is_blank()?)
        }
        "capitalizeFirstLetter" => {
            arity(method, args, 0)?;
            receiver.capitalize_first_letter()?
        }
        "invert" => {
            arity(method, args, 0)?;
            receiver.invert()?
        }
        "fetch" => receiver.fetch(single(method, args)?)?,
        "find" => receiver.find(single(method, args)?)?,
        "index" => {
            arity(method, args, 0)?;
            receiver.index()?
        }
        "isFirst" => {
            arity(method, args, 0)?;
            Value::Boolean(receiver.is_first()?)
        }
        "isLast" => {
            arity(method, args, 0)?;
            Value::Boolean(receiver.is_last()?)
        }
        "eq" => Value::Boolean(receiver == single(method, args)?),
        "typename" => {
            arity(method, args, 0)?;
            Value::string(receiver.typename())
        }
        "asBoolean" => {
            arity(method, args, 0)?;
            Value::Boolean(receiver.as_boolean()?)
        }
        "asInteger" => {
            arity(method, args, 0)?;
            Value::Integer(receiver.as_integer()?)
        }
        "asReal" => {
            arity(method, args, 0)?;
            Value::Real(receiver.as_real()?)
        }
        "asString" => {
            arity(method, args, 0)?;
            Value::String(receiver.as_string()?)
        }
        "asList" => {
            arity(method, args, 0)?;
            Value::List(receiver.as_list()?)
        }
        "asMap" => {
            arity(method, args, 0)?;
            Value::Map(receiver.as_map()?)
        }
        _ => {
            return Err(EvalError::UnknownOperation {
                method: method.to_string(),
            });
        }
    };
    Ok(value)
}

fn arity(method: &str, args: &[Value], expected: usize) -> Result<(), EvalError> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(EvalError::ArgumentCount {
            method: method.to_string(),
            expected,
            found: args.len(),
        })
    }
}

fn single<'a>(method: &str, args: &'a [Value]) -> Result<&'a Value, EvalError> {
    match args {
        [arg] => Ok(arg),
        _ => Err(EvalError::ArgumentCount {
            method: method.to_string(),
            expected: 1,
            found: args.len(),
        }),
    }
}
