//! Stencil - A small text template engine
//!
//! Stencil renders text templates made of literal text, `{{ expression }}`
//! markers and `{{when cond}}...{{else when cond}}...{{else}}...{{end}}`
//! conditional blocks. Expressions read from bindings supplied at render time
//! and from globals registered on the engine.
//!
//! # Quick Start
//!
//! ```
//! use stencil::{Bindings, Engine, EngineOptions, Value};
//!
//! // Create an engine with a global value
//! let engine = Engine::new(EngineOptions::default(), |env| {
//!     env.register("site", Value::string("Stencil"));
//! });
//!
//! // Compile once
//! let template = engine
//!     .compile("{{when items.isEmpty()}}Nothing on {{ site }}{{else}}{{ items[0] }} and more{{end}}")
//!     .unwrap();
//!
//! // Render many times with different bindings
//! let mut bindings = Bindings::new();
//! bindings.insert("items".to_string(), Value::list(Vec::new()));
//! assert_eq!(template.render(&bindings).unwrap(), "Nothing on Stencil");
//!
//! bindings.insert("items".to_string(), Value::list(vec![Value::string("apples"), Value::string("pears")]));
//! assert_eq!(template.render(&bindings).unwrap(), "apples and more");
//! ```
//!
//! # Errors
//!
//! Both compilation and rendering return [`Error`], which carries the
//! template text and can be rendered with [`render_error`] or inspected as a
//! [`Diagnostic`].
//!
//! ```
//! use stencil::{Bindings, Engine, EngineOptions, render_error_to_string_no_color};
//!
//! let engine = Engine::new(EngineOptions::default(), |_| {});
//! let err = engine.render("Hello {{ nobody }}", &Bindings::new()).unwrap_err();
//! assert_eq!(err.code(), "R003");
//! assert!(render_error_to_string_no_color(&err).contains("Undefined variable 'nobody'"));
//! ```

mod error_renderer;

// Re-export public API from stencil_core
pub use stencil_core::api::{
    Diagnostic, Engine, EngineOptions, EnvironmentBuilder, Error, ExecutionOptions, ParseOptions,
    RelatedInfo, Severity, Template,
};

// Re-export commonly used types and values
pub use stencil_core::expression::{Bindings, Expression, ExpressionEvaluator};
pub use stencil_core::values::{self, Value, ValueType};

// Re-export errors
pub use stencil_core::evaluator::EvalError;
pub use stencil_core::parser::ParseError;
pub use stencil_core::template::ResolveError;

pub use error_renderer::{
    render_error, render_error_to, render_error_to_string, render_error_to_string_no_color,
};
