//! Compiled templates.

use std::sync::Arc;

use super::Error;
use crate::evaluator::Evaluator;
use crate::expression::{Bindings, ExpressionEvaluator};
use crate::template::{TemplateElement, resolve};

/// A compiled template ready for rendering.
///
/// Templates are immutable and cheap to clone. One template can be rendered
/// concurrently from many threads, each call with its own bindings.
///
/// # Example
///
/// ```
/// use stencil_core::api::{Engine, EngineOptions};
/// use stencil_core::expression::Bindings;
/// use stencil_core::values::Value;
///
/// let engine = Engine::new(EngineOptions::default(), |_| {});
/// let template = engine.compile("Hello, {{ name.capitalizeFirstLetter() }}!").unwrap();
///
/// let mut bindings = Bindings::new();
/// bindings.insert("name".to_string(), Value::string("world"));
/// assert_eq!(template.render(&bindings).unwrap(), "Hello, World!");
/// ```
#[derive(Debug, Clone)]
pub struct Template {
    source: Arc<str>,
    elements: Arc<[TemplateElement]>,
    evaluator: Arc<Evaluator>,
}

static_assertions::assert_impl_all!(Template: Send, Sync);

impl Template {
    pub(crate) fn new(
        source: Arc<str>,
        elements: Vec<TemplateElement>,
        evaluator: Arc<Evaluator>,
    ) -> Self {
        Self {
            source,
            elements: elements.into(),
            evaluator,
        }
    }

    /// The template source text.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The parsed element tree.
    pub fn elements(&self) -> &[TemplateElement] {
        &self.elements
    }

    /// Render with the engine's evaluator and globals.
    pub fn render(&self, bindings: &Bindings) -> Result<String, Error> {
        self.render_with(self.evaluator.as_ref(), bindings)
    }

    /// Render with a custom expression evaluator.
    pub fn render_with(
        &self,
        evaluator: &dyn ExpressionEvaluator,
        bindings: &Bindings,
    ) -> Result<String, Error> {
        tracing::debug!(
            elements = self.elements.len(),
            bindings = bindings.len(),
            "Rendering template"
        );
        let output = resolve(&self.elements, evaluator, bindings).map_err(|error| {
            tracing::debug!(%error, "Template rendering failed");
            Error::Resolve {
                template: self.source.to_string(),
                error,
            }
        })?;
        tracing::debug!(bytes = output.len(), "Rendered template");
        Ok(output)
    }
}
