//! Configuration options for the Stencil engine.

/// Configuration options for template parsing.
///
/// # Example
///
/// ```
/// use stencil_core::api::ParseOptions;
///
/// let options = ParseOptions { max_nesting_depth: 16 };
/// ```
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Maximum nesting of `{{when}}` blocks, and separately of brackets,
    /// parentheses and braces inside a single expression.
    ///
    /// Default: 100
    pub max_nesting_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_nesting_depth: 100,
        }
    }
}

/// Configuration options for expression evaluation.
///
/// # Example
///
/// ```
/// use stencil_core::api::ExecutionOptions;
///
/// let options = ExecutionOptions { max_depth: 500 };
/// ```
#[derive(Debug, Clone)]
pub struct ExecutionOptions {
    /// Maximum evaluation stack depth (for recursion protection).
    ///
    /// Default: 1000
    pub max_depth: usize,
}

impl Default for ExecutionOptions {
    fn default() -> Self {
        Self { max_depth: 1000 }
    }
}

/// Configuration options for the Stencil engine.
///
/// These apply to every template compiled and rendered by the engine.
#[derive(Debug, Clone, Default)]
pub struct EngineOptions {
    pub parse: ParseOptions,
    pub execution: ExecutionOptions,
}
