//! Positional access (`fetch`) and sub-sequence search (`find`).
//!
//! Strings, lists and maps share one contract: a successful lookup yields an item
//! carrying the index it was found at. Only an in-range integer fetch on a string or
//! list records first/last flags. A failed fetch still yields an item (wrapping void,
//! with the requested index), while a failed search yields plain void.

use std::sync::Arc;

use ecow::{EcoString, EcoVec};

use crate::values::{Item, MapEntries, Value, ValueError};

impl Value {
    /// Random access by integer position (string, list) or by key (map).
    pub fn fetch(&self, key: &Value) -> Result<Value, ValueError> {
        match self.origin() {
            Value::String(s) => fetch_in_string(s, key),
            Value::List(values) => fetch_in_list(values, key),
            Value::Map(entries) => fetch_in_map(entries, key),
            other => Err(ValueError::not_applicable_for_type(
                "fetch",
                other.typename(),
                "string, list or map",
            )),
        }
    }

    /// Leftmost occurrence of `needle` in a string or list.
    pub fn find(&self, needle: &Value) -> Result<Value, ValueError> {
        match self.origin() {
            Value::String(s) => find_in_string(s, needle),
            Value::List(values) => find_in_list(values, needle),
            other => Err(ValueError::not_applicable_for_type(
                "find",
                other.typename(),
                "string or list",
            )),
        }
    }
}

fn integer_index(key: &Value) -> Result<i64, ValueError> {
    match key.origin() {
        Value::Integer(i) => Ok(*i),
        other => Err(ValueError::invalid_index_type(other.typename(), "integer")),
    }
}

/// Position `i` within a sequence of `len` elements, if in range.
fn in_range(i: i64, len: usize) -> Option<usize> {
    usize::try_from(i).ok().filter(|&i| i < len)
}

fn item(item: Item) -> Value {
    Value::Item(Arc::new(item))
}

fn missing(index: i64) -> Value {
    item(Item::located(Value::Void, Value::Integer(index)))
}

pub(crate) fn fetch_in_string(s: &EcoString, key: &Value) -> Result<Value, ValueError> {
    let i = integer_index(key)?;
    let len = s.chars().count();
    let Some(pos) = in_range(i, len) else {
        return Ok(missing(i));
    };

    let mut element = EcoString::new();
    if let Some(c) = s.chars().nth(pos) {
        element.push(c);
    }
    Ok(item(Item::positioned(Value::String(element), pos, len)))
}

pub(crate) fn fetch_in_list(values: &EcoVec<Value>, key: &Value) -> Result<Value, ValueError> {
    let i = integer_index(key)?;
    match in_range(i, values.len()) {
        Some(pos) => Ok(item(Item::positioned(
            values[pos].clone(),
            pos,
            values.len(),
        ))),
        None => Ok(missing(i)),
    }
}

pub(crate) fn fetch_in_map(entries: &MapEntries, key: &Value) -> Result<Value, ValueError> {
    let key = key.origin();
    match key {
        Value::Boolean(_) | Value::Integer(_) | Value::Real(_) | Value::String(_) => {}
        other => return Err(ValueError::invalid_key_type(other.typename())),
    }

    let value = entries
        .iter()
        .find(|(existing, _)| existing == key)
        .map(|(_, value)| value.clone())
        .unwrap_or(Value::Void);
    Ok(item(Item::located(value, key.clone())))
}

pub(crate) fn find_in_string(s: &EcoString, needle: &Value) -> Result<Value, ValueError> {
    let needle = needle.as_string()?;

    match s.find(needle.as_str()) {
        Some(byte_offset) => {
            let offset = s[..byte_offset].chars().count();
            Ok(item(Item::located(
                Value::String(needle),
                Value::Integer(offset as i64),
            )))
        }
        None => Ok(Value::Void),
    }
}

pub(crate) fn find_in_list(values: &EcoVec<Value>, needle: &Value) -> Result<Value, ValueError> {
    let sub: EcoVec<Value> = match needle.origin() {
        Value::List(sub) => sub.clone(),
        other => ecow::eco_vec![other.clone()],
    };

    if sub.len() > values.len() {
        return Ok(Value::Void);
    }

    let found = (0..=values.len() - sub.len())
        .find(|&start| values[start..start + sub.len()] == sub[..]);

    match found {
        Some(start) => Ok(item(Item::located(
            Value::List(values[start..start + sub.len()].iter().cloned().collect()),
            Value::Integer(start as i64),
        ))),
        None => Ok(Value::Void),
    }
}
