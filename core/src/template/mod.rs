//! The parsed template element tree and its resolver.

mod element;
mod error;
mod resolver;


pub use element::{ElementKind, TemplateElement, WhenBranch};
pub use error::ResolveError;
pub use resolver::resolve;
