use crate::api::{Diagnostic, RelatedInfo, Severity};
use crate::evaluator::EvalError;
use crate::parser::{Span, TextPosition};
use thiserror::Error;

/// Failure while resolving a template element.
///
/// Wraps the evaluation failure with the location and source text of the
/// element (or `when` branch) that caused it.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{source} (at {position} in `{element}`)")]
pub struct ResolveError {
    pub position: TextPosition,
    /// Span of the failing expression.
    pub span: Span,
    /// Source text of the failing marker.
    pub element: String,
    pub source: EvalError,
}

impl ResolveError {
    pub fn code(&self) -> &'static str {
        self.source.code()
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let marker = Span::new(
            self.position.offset,
            self.position.offset + self.element.len(),
        );
        let related = if marker == self.span {
            Vec::new()
        } else {
            vec![RelatedInfo {
                span: marker,
                message: "while resolving this marker".to_string(),
            }]
        };
        Diagnostic {
            severity: Severity::Error,
            message: self.source.to_string(),
            span: self.span.clone(),
            related,
            help: self.source.help(),
            code: Some(self.code().to_string()),
        }
    }
}
