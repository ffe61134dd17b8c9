//! Public API for the Stencil template engine.
//!
//! Build an [`Engine`] once, compile template sources into [`Template`]s and
//! render them with per-call bindings.
//!
//! # Example
//!
//! ```
//! use stencil_core::api::{Engine, EngineOptions};
//! use stencil_core::expression::Bindings;
//! use stencil_core::values::Value;
//!
//! let engine = Engine::new(EngineOptions::default(), |env| {
//!     env.register("pi", Value::real(3.14159));
//! });
//!
//! let template = engine.compile("pi is about {{ pi }}").unwrap();
//! assert_eq!(template.render(&Bindings::new()).unwrap(), "pi is about 3.14159");
//! ```

pub mod engine;
pub mod environment;
pub mod error;
pub mod options;
pub mod template;

pub use engine::Engine;
pub use environment::EnvironmentBuilder;
pub use error::{Diagnostic, Error, RelatedInfo, Severity};
pub use options::{EngineOptions, ExecutionOptions, ParseOptions};
pub use template::Template;
