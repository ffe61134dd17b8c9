mod error;
mod indexing;
mod item;
mod operations;
mod value;

pub use error::ValueError;
pub use item::Item;
pub use value::{MapEntries, Value, ValueType};
