use crate::expression::{Bindings, Expression, ExpressionEvaluator};
use crate::parser::{Span, TextPosition};
use crate::template::{ResolveError, resolve};

/// A node of the parsed template.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateElement {
    pub position: TextPosition,
    pub span: Span,
    /// Source text of the whole element.
    pub text: String,
    pub kind: ElementKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ElementKind {
    /// Literal text, emitted as is.
    Text,
    /// `{{ expr }}`
    Marker(Expression),
    /// `{{when}}` block. Branches are tried in order.
    When(Vec<WhenBranch>),
}

/// One `{{when}}`, `{{else when}}` or `{{else}}` arm of a `when` block.
#[derive(Debug, Clone, PartialEq)]
pub struct WhenBranch {
    /// Position of the opening marker.
    pub position: TextPosition,
    /// Source text of the opening marker.
    pub text: String,
    pub condition: Expression,
    pub elements: Vec<TemplateElement>,
}

impl TemplateElement {
    pub fn is_marker(&self) -> bool {
        !matches!(self.kind, ElementKind::Text)
    }

    pub fn resolve(
        &self,
        evaluator: &dyn ExpressionEvaluator,
        bindings: &Bindings,
    ) -> Result<String, ResolveError> {
        resolve(std::slice::from_ref(self), evaluator, bindings)
    }
}
