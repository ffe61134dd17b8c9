//! Value operations: casting accessors, predicates and item metadata.
//!
//! Apart from `index`, `is_first` and `is_last`, every operation sees through an item
//! to the value it wraps.

use ecow::{EcoString, EcoVec};

use crate::casting;
use crate::values::{MapEntries, Value, ValueError};

impl Value {
    pub fn as_boolean(&self) -> Result<bool, ValueError> {
        casting::cast_to_boolean(self)
    }

    pub fn as_integer(&self) -> Result<i64, ValueError> {
        casting::cast_to_integer(self)
    }

    pub fn as_real(&self) -> Result<f64, ValueError> {
        casting::cast_to_real(self)
    }

    pub fn as_string(&self) -> Result<EcoString, ValueError> {
        casting::cast_to_string(self)
    }

    pub fn as_list(&self) -> Result<EcoVec<Value>, ValueError> {
        casting::cast_to_list(self)
    }

    pub fn as_map(&self) -> Result<MapEntries, ValueError> {
        casting::cast_to_map(self)
    }

    pub fn is_void(&self) -> bool {
        matches!(self.origin(), Value::Void)
    }

    pub fn is_empty(&self) -> Result<bool, ValueError> {
        match self.origin() {
            Value::String(s) => Ok(s.is_empty()),
            Value::List(values) => Ok(values.is_empty()),
            Value::Map(entries) => Ok(entries.is_empty()),
            other => Err(ValueError::not_applicable_for_type(
                "isEmpty",
                other.typename(),
                "string, list or map",
            )),
        }
    }

    /// True for an empty string or one made only of whitespace.
    pub fn is_blank(&self) -> Result<bool, ValueError> {
        match self.origin() {
            Value::String(s) => Ok(s.chars().all(char::is_whitespace)),
            other => Err(ValueError::not_applicable_for_type(
                "isBlank",
                other.typename(),
                "string",
            )),
        }
    }

    pub fn capitalize_first_letter(&self) -> Result<Value, ValueError> {
        let s = match self.origin() {
            Value::String(s) => s,
            other => {
                return Err(ValueError::not_applicable_for_type(
                    "capitalizeFirstLetter",
                    other.typename(),
                    "string",
                ));
            }
        };

        // Only one-to-one case mappings apply; `ß` stays `ß` rather than becoming `SS`.
        let mut chars = s.chars();
        let upper = chars
            .next()
            .filter(|first| first.is_alphabetic() && !first.is_uppercase())
            .and_then(|first| {
                let mut upper = first.to_uppercase();
                match (upper.next(), upper.next()) {
                    (Some(single), None) if single != first => Some(single),
                    _ => None,
                }
            });
        match upper {
            Some(upper) => {
                let mut capitalized = EcoString::new();
                capitalized.push(upper);
                capitalized.push_str(chars.as_str());
                Ok(Value::String(capitalized))
            }
            None => Ok(Value::String(s.clone())),
        }
    }

    /// Logical negation of a boolean, arithmetic negation of a number.
    pub fn invert(&self) -> Result<Value, ValueError> {
        match self.origin() {
            Value::Boolean(b) => Ok(Value::Boolean(!b)),
            Value::Integer(i) => Ok(Value::Integer(i.wrapping_neg())),
            Value::Real(r) => Ok(Value::Real(-r)),
            other => Err(ValueError::not_applicable_for_type(
                "invert",
                other.typename(),
                "boolean, integer or real",
            )),
        }
    }

    /// Where this item was found: an integer position or the map key.
    pub fn index(&self) -> Result<Value, ValueError> {
        match self {
            Value::Item(item) => Ok(item.index().clone()),
            _ => Err(ValueError::not_applicable("index")),
        }
    }

    pub fn is_first(&self) -> Result<bool, ValueError> {
        match self {
            Value::Item(item) => item
                .is_first()
                .ok_or_else(|| ValueError::not_applicable("isFirst")),
            _ => Err(ValueError::not_applicable("isFirst")),
        }
    }

    pub fn is_last(&self) -> Result<bool, ValueError> {
        match self {
            Value::Item(item) => item
                .is_last()
                .ok_or_else(|| ValueError::not_applicable("isLast")),
            _ => Err(ValueError::not_applicable("isLast")),
        }
    }
}
