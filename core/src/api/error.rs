//! Public error types for the Stencil API.
//!
//! This module defines the stable error types exposed to library users.
//! Internal errors are converted to these public types at API boundaries.

use core::fmt;

use thiserror::Error;

use crate::parser::{ParseError, Span};
use crate::template::ResolveError;

/// Public error type for all Stencil operations.
///
/// Each variant keeps the template source so the error can be rendered with
/// labelled snippets, either through [`Error::to_diagnostic`] or through
/// `miette`.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// The template source is not valid template syntax.
    #[error("{error}")]
    Parse { template: String, error: ParseError },

    /// Rendering failed on one of the template's markers.
    #[error("{error}")]
    Resolve {
        template: String,
        error: ResolveError,
    },
}

impl Error {
    /// The template source the error refers to.
    pub fn template(&self) -> &str {
        match self {
            Error::Parse { template, .. } | Error::Resolve { template, .. } => template,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Error::Parse { error, .. } => error.code(),
            Error::Resolve { error, .. } => error.code(),
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            Error::Parse { error, .. } => error.to_diagnostic(),
            Error::Resolve { error, .. } => error.to_diagnostic(),
        }
    }
}

impl miette::Diagnostic for Error {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(Error::code(self)))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match self {
            Error::Parse { error, .. } => error.help(),
            Error::Resolve { error, .. } => error.source.help(),
        };
        help.map(|help| Box::new(help) as Box<dyn fmt::Display + 'a>)
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Error::Parse { template, .. } | Error::Resolve { template, .. } => {
                Some(template as &dyn miette::SourceCode)
            }
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = miette::LabeledSpan> + '_>> {
        let diagnostic = self.to_diagnostic();
        let primary = miette::LabeledSpan::new(
            Some(diagnostic.message.clone()),
            diagnostic.span.0.start,
            diagnostic.span.len(),
        );
        let related = diagnostic.related.into_iter().map(|info| {
            miette::LabeledSpan::new(Some(info.message), info.span.0.start, info.span.len())
        });
        Some(Box::new(core::iter::once(primary).chain(related)))
    }
}

/// A diagnostic message (error, warning, or info) with source location.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// Severity level (error, warning, info).
    pub severity: Severity,

    /// Primary diagnostic message.
    pub message: String,

    /// Source location of the primary issue.
    pub span: Span,

    /// Related locations that provide additional context.
    pub related: Vec<RelatedInfo>,

    /// Optional help text suggesting how to fix the issue.
    pub help: Option<String>,

    /// Error code (e.g., "P001") for documentation lookup.
    pub code: Option<String>,
}

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Error - rendering cannot succeed.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Related information for a diagnostic (e.g., "while resolving this marker").
#[derive(Debug, Clone)]
pub struct RelatedInfo {
    /// Source location of the related information.
    pub span: Span,

    /// Message explaining the relevance.
    pub message: String,
}
