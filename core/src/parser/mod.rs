mod parsed_expr;
pub mod parser;
mod syntax;
pub mod error;

// Re-export the parser and rule enum for external use
pub use parser::TemplateParser;
pub use parser::Rule;
pub use parser::{parse_statement, parse_template};

pub use crate::api::ParseOptions;
pub use parsed_expr::{Expr, Literal};
pub use syntax::{BoolOp, ComparisonOp, Span, TextPosition, UnaryOp};
pub use error::{ParseError, ParseErrorKind};
