//! Environment builder for registering global values.

use crate::expression::Bindings;
use crate::values::Value;

/// Builder for constructing the global environment.
///
/// Globals are visible to every template rendered by the engine. Render
/// bindings with the same name take precedence.
///
/// # Example
///
/// ```
/// use stencil_core::api::{Engine, EngineOptions};
/// use stencil_core::values::Value;
///
/// // EnvironmentBuilder is used inside Engine::new
/// let engine = Engine::new(EngineOptions::default(), |env| {
///     env.register("site", Value::string("example.org"));
/// });
/// ```
#[derive(Debug, Default)]
pub struct EnvironmentBuilder {
    entries: Bindings,
}

impl EnvironmentBuilder {
    /// Create a new environment builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a global value. Registering a name twice keeps the last value.
    pub fn register(&mut self, name: &str, value: impl Into<Value>) -> &mut Self {
        self.entries.insert(name.to_string(), value.into());
        self
    }

    /// Build the final global bindings.
    ///
    /// This is called internally by Engine::new().
    pub(crate) fn build(self) -> Bindings {
        self.entries
    }
}
