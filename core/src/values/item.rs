use crate::values::Value;

/// A value located inside a container, with the metadata of where it was found.
///
/// Items are produced only by `fetch` and `find`. The index is always known; the
/// first/last flags exist only when a string or list was fetched with an in-range
/// integer index.
#[derive(Debug, Clone)]
pub struct Item {
    value: Value,
    index: Value,
    bounds: Option<Bounds>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Bounds {
    first: bool,
    last: bool,
}

impl Item {
    /// An element fetched at `index` of a sequence with `len` elements.
    pub(crate) fn positioned(value: Value, index: usize, len: usize) -> Self {
        Self {
            value: value.origin().clone(),
            index: Value::Integer(index as i64),
            bounds: Some(Bounds {
                first: index == 0,
                last: index + 1 == len,
            }),
        }
    }

    /// A value found under `index` without a position in a sequence.
    pub(crate) fn located(value: Value, index: Value) -> Self {
        Self {
            value: value.origin().clone(),
            index: index.origin().clone(),
            bounds: None,
        }
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn index(&self) -> &Value {
        &self.index
    }

    pub fn is_first(&self) -> Option<bool> {
        self.bounds.map(|b| b.first)
    }

    pub fn is_last(&self) -> Option<bool> {
        self.bounds.map(|b| b.last)
    }
}
