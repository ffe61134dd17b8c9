use core::fmt;
use std::sync::Arc;

use ecow::{EcoString, EcoVec};

use crate::{casting::format_real, values::item::Item};

/// Ordered key/value pairs of a map value. Keys are unique.
pub type MapEntries = EcoVec<(Value, Value)>;

/// A runtime value.
///
/// The set of variants is closed: every operation matches all of them. Values are
/// immutable and cheap to clone (containers are reference counted), so one value can
/// be shared between threads rendering the same template.
#[derive(Clone, Debug, Default)]
pub enum Value {
    /// Absence of a value. Never equal to an empty string, list or map.
    #[default]
    Void,
    Boolean(bool),
    Integer(i64),
    Real(f64),
    String(EcoString),
    List(EcoVec<Value>),
    Map(MapEntries),
    /// A value located inside a container by `fetch` or `find`.
    Item(Arc<Item>),
}

/// Type tag of a value. An [`Value::Item`] reports the type of the value it wraps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Void,
    Boolean,
    Integer,
    Real,
    String,
    List,
    Map,
}

impl ValueType {
    pub fn typename(self) -> &'static str {
        match self {
            ValueType::Void => "void",
            ValueType::Boolean => "boolean",
            ValueType::Integer => "integer",
            ValueType::Real => "real",
            ValueType::String => "string",
            ValueType::List => "list",
            ValueType::Map => "map",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.typename())
    }
}

impl Value {
    pub const VOID: Value = Value::Void;

    // ============================================================================
    // Construction
    // ============================================================================

    pub fn boolean(value: bool) -> Self {
        Value::Boolean(value)
    }

    pub fn integer(value: i64) -> Self {
        Value::Integer(value)
    }

    pub fn real(value: f64) -> Self {
        Value::Real(value)
    }

    pub fn string(value: impl Into<EcoString>) -> Self {
        Value::String(value.into())
    }

    pub fn list(values: impl IntoIterator<Item = Value>) -> Self {
        Value::List(values.into_iter().collect())
    }

    /// Create a map value from ordered entries.
    ///
    /// A repeated key keeps the position of its first occurrence and the value of its
    /// last one.
    pub fn map(entries: impl IntoIterator<Item = (Value, Value)>) -> Self {
        let mut map: MapEntries = EcoVec::new();
        for (key, value) in entries {
            match map.iter().position(|(existing, _)| *existing == key) {
                Some(pos) => map.make_mut()[pos].1 = value,
                None => map.push((key, value)),
            }
        }
        Value::Map(map)
    }

    // ============================================================================
    // Type information
    // ============================================================================

    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Void => ValueType::Void,
            Value::Boolean(_) => ValueType::Boolean,
            Value::Integer(_) => ValueType::Integer,
            Value::Real(_) => ValueType::Real,
            Value::String(_) => ValueType::String,
            Value::List(_) => ValueType::List,
            Value::Map(_) => ValueType::Map,
            Value::Item(item) => item.value().value_type(),
        }
    }

    pub fn typename(&self) -> &'static str {
        self.value_type().typename()
    }

    /// The value itself, or for an item the value it wraps.
    pub fn origin(&self) -> &Value {
        match self {
            Value::Item(item) => item.value().origin(),
            other => other,
        }
    }

    pub fn is_item(&self) -> bool {
        matches!(self, Value::Item(_))
    }
}

impl PartialEq for Value {
    /// Type-strict deep equality. `"1"` never equals `1`, and void equals only void.
    fn eq(&self, other: &Self) -> bool {
        match (self.origin(), other.origin()) {
            (Value::Void, Value::Void) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Real(a), Value::Real(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Value::String(a), Value::String(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    /// Literal form of the value, used in logs and error messages.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Void => f.write_str("void"),
            Value::Boolean(value) => write!(f, "{}", value),
            Value::Integer(value) => write!(f, "{}", value),
            Value::Real(value) => f.write_str(&format_real(*value)),
            Value::String(value) => write!(f, "{:?}", value.as_str()),
            Value::List(values) => {
                f.write_str("[")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", value)?;
                }
                f.write_str("]")
            }
            Value::Map(entries) => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                f.write_str("}")
            }
            Value::Item(item) => write!(f, "{}", item.value()),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer(value.into())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Real(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.into())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value.into())
    }
}

impl From<EcoString> for Value {
    fn from(value: EcoString) -> Self {
        Value::String(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(values: Vec<Value>) -> Self {
        Value::List(values.into())
    }
}

static_assertions::assert_impl_all!(Value: Send, Sync);
