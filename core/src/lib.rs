//! Core of the Stencil template engine.
//!
//! - [`values`]: the dynamic value model with equality, indexing and search
//! - [`casting`]: coercion between value kinds
//! - [`parser`]: the template and expression grammar
//! - [`expression`] and [`evaluator`]: expression evaluation
//! - [`template`]: the element tree and its resolver
//! - [`api`]: the engine, compiled templates and public errors

pub mod api;
pub mod casting;
pub mod evaluator;
pub mod expression;
pub mod parser;
pub mod template;
pub mod values;
