//! The Stencil template engine.

use std::sync::Arc;

use super::{EngineOptions, EnvironmentBuilder, Error, Template};
use crate::evaluator::Evaluator;
use crate::expression::Bindings;
use crate::parser;

/// The Stencil compilation and rendering engine.
///
/// The engine manages:
/// - Global environment (values visible to every template)
/// - Parse and execution configuration (EngineOptions)
///
/// An engine is immutable after construction and can be shared freely across
/// threads.
///
/// # Example
///
/// ```
/// use stencil_core::api::{Engine, EngineOptions};
/// use stencil_core::expression::Bindings;
/// use stencil_core::values::Value;
///
/// let engine = Engine::new(EngineOptions::default(), |env| {
///     env.register("site", Value::string("Stencil"));
/// });
///
/// let template = engine
///     .compile("{{when user.isVoid()}}Welcome to {{ site }}{{else}}Hi {{ user }}{{end}}")
///     .unwrap();
///
/// let mut bindings = Bindings::new();
/// bindings.insert("user".to_string(), Value::VOID);
/// assert_eq!(template.render(&bindings).unwrap(), "Welcome to Stencil");
///
/// bindings.insert("user".to_string(), Value::string("Ada"));
/// assert_eq!(template.render(&bindings).unwrap(), "Hi Ada");
/// ```
#[derive(Debug, Clone)]
pub struct Engine {
    evaluator: Arc<Evaluator>,
    options: EngineOptions,
}

static_assertions::assert_impl_all!(Engine: Send, Sync);

impl Engine {
    /// Create a new engine with a custom environment.
    ///
    /// The initialization closure receives the environment builder for
    /// registering globals.
    pub fn new(options: EngineOptions, init: impl FnOnce(&mut EnvironmentBuilder)) -> Self {
        // Build environment using the initialization closure
        let mut env_builder = EnvironmentBuilder::new();
        init(&mut env_builder);
        let globals = env_builder.build();
        tracing::debug!(globals = globals.len(), "Created engine");

        Self {
            evaluator: Arc::new(Evaluator::new(options.execution.clone(), globals)),
            options,
        }
    }

    /// Access the global environment.
    pub fn globals(&self) -> &Bindings {
        self.evaluator.globals()
    }

    /// Access the engine options.
    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Compile a template.
    ///
    /// Fails with [`Error::Parse`] when the source is not valid template syntax.
    pub fn compile(&self, source: &str) -> Result<Template, Error> {
        let elements = parser::parse_template(source, &self.options.parse).map_err(|error| {
            tracing::debug!(%error, "Template compilation failed");
            Error::Parse {
                template: source.to_string(),
                error,
            }
        })?;
        tracing::debug!(
            elements = elements.len(),
            markers = elements.iter().filter(|e| e.is_marker()).count(),
            "Compiled template"
        );
        Ok(Template::new(source.into(), elements, self.evaluator.clone()))
    }

    /// Compile and render a template in one step.
    pub fn render(&self, source: &str, bindings: &Bindings) -> Result<String, Error> {
        self.compile(source)?.render(bindings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values::Value;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_globals_are_visible() {
        let engine = Engine::new(EngineOptions::default(), |env| {
            env.register("greeting", "Hello").register("answer", 42);
        });
        assert_eq!(engine.globals().len(), 2);
        assert_eq!(
            engine.render("{{greeting}} {{answer}}", &Bindings::new()).unwrap(),
            "Hello 42"
        );
    }

    #[test]
    fn test_bindings_shadow_globals() {
        let engine = Engine::new(EngineOptions::default(), |env| {
            env.register("name", Value::string("global"));
        });
        let mut bindings = Bindings::new();
        bindings.insert("name".to_string(), Value::string("local"));
        assert_eq!(engine.render("{{ name }}", &bindings).unwrap(), "local");
    }

    #[test]
    fn test_options_reach_parser_and_evaluator() {
        let mut options = EngineOptions::default();
        options.parse.max_nesting_depth = 1;
        let engine = Engine::new(options, |_| {});
        let err = engine.compile("{{when a}}{{when b}}{{end}}{{end}}").unwrap_err();
        assert_eq!(err.code(), "P004");

        let mut options = EngineOptions::default();
        options.execution.max_depth = 1;
        let engine = Engine::new(options, |_| {});
        let err = engine.render("{{ [1] }}", &Bindings::new()).unwrap_err();
        assert_eq!(err.code(), "R005");
    }
}
