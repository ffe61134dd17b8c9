//! Coercion between value kinds.
//!
//! Every function here is total: it either produces the requested payload or fails
//! with an `IrregularValueType` error naming the source type. A value coerced to its
//! own kind is returned unchanged.
//!
//! | From → To                    | Rule                                              |
//! |------------------------------|---------------------------------------------------|
//! | string → boolean             | `true` / `false`, ASCII case-insensitive          |
//! | string → integer / real      | numeric literal parse                             |
//! | integer → real               | exact widening                                    |
//! | real → integer               | only finite integral values in range              |
//! | boolean/integer/real → string| canonical text (`true`, `42`, `3.0`)              |
//! | string → list / map          | the text must be a list / map literal             |
//! | void → string                | empty string                                      |
//!
//! Any other pair fails.

use ecow::{EcoString, EcoVec};

use crate::{
    evaluator, parser,
    values::{MapEntries, Value, ValueError},
};

pub fn cast_to_boolean(value: &Value) -> Result<bool, ValueError> {
    match value.origin() {
        Value::Boolean(b) => Ok(*b),
        Value::String(s) => {
            if s.eq_ignore_ascii_case("true") {
                Ok(true)
            } else if s.eq_ignore_ascii_case("false") {
                Ok(false)
            } else {
                Err(ValueError::cast_text(s, "boolean"))
            }
        }
        other => Err(ValueError::cast(other.typename(), "boolean")),
    }
}

pub fn cast_to_integer(value: &Value) -> Result<i64, ValueError> {
    match value.origin() {
        Value::Integer(i) => Ok(*i),
        Value::Real(r) => {
            if r.is_finite() && r.fract() == 0.0 && *r >= i64::MIN as f64 && *r < i64::MAX as f64
            {
                Ok(*r as i64)
            } else {
                Err(ValueError::IrregularValueType {
                    typename: "real",
                    message: format!("Real {} cannot be cast to integer", format_real(*r)),
                })
            }
        }
        Value::String(s) => s
            .parse::<i64>()
            .map_err(|_| ValueError::cast_text(s, "integer")),
        other => Err(ValueError::cast(other.typename(), "integer")),
    }
}

pub fn cast_to_real(value: &Value) -> Result<f64, ValueError> {
    match value.origin() {
        Value::Real(r) => Ok(*r),
        Value::Integer(i) => Ok(*i as f64),
        Value::String(s) => s.parse::<f64>().map_err(|_| ValueError::cast_text(s, "real")),
        other => Err(ValueError::cast(other.typename(), "real")),
    }
}

pub fn cast_to_string(value: &Value) -> Result<EcoString, ValueError> {
    match value.origin() {
        Value::String(s) => Ok(s.clone()),
        Value::Void => Ok(EcoString::new()),
        Value::Boolean(b) => Ok(if *b { "true".into() } else { "false".into() }),
        Value::Integer(i) => Ok(ecow::eco_format!("{}", i)),
        Value::Real(r) => Ok(format_real(*r).into()),
        other => Err(ValueError::cast(other.typename(), "string")),
    }
}

pub fn cast_to_list(value: &Value) -> Result<EcoVec<Value>, ValueError> {
    match value.origin() {
        Value::List(values) => Ok(values.clone()),
        Value::String(s) => match parse_literal(s) {
            Some(Value::List(values)) => Ok(values),
            _ => Err(ValueError::cast_text(s, "list")),
        },
        other => Err(ValueError::cast(other.typename(), "list")),
    }
}

pub fn cast_to_map(value: &Value) -> Result<MapEntries, ValueError> {
    match value.origin() {
        Value::Map(entries) => Ok(entries.clone()),
        Value::String(s) => match parse_literal(s) {
            Some(Value::Map(entries)) => Ok(entries),
            _ => Err(ValueError::cast_text(s, "map")),
        },
        other => Err(ValueError::cast(other.typename(), "map")),
    }
}

/// Evaluate `text` as a constant expression. Variable references make it fail.
fn parse_literal(text: &str) -> Option<Value> {
    let expr = parser::parse_statement(text, &parser::ParseOptions::default()).ok()?;
    evaluator::eval_constant(&expr).ok()
}

/// Canonical text of a real: always has a fractional part (`3.0`, not `3`).
pub fn format_real(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else {
        let s = value.to_string();
        if s.contains('.') || s.contains('e') || s.contains('E') {
            s
        } else {
            format!("{}.0", s)
        }
    }
}
