use crate::api::{Diagnostic, Severity};
use crate::parser::{Rule, Span, TextPosition};

/// Parser error with location.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
    pub position: TextPosition,
}

/// Specific kinds of parse errors
#[derive(Debug, Clone, PartialEq)]
pub enum ParseErrorKind {
    /// Unexpected token
    UnexpectedToken { expected: String, found: String },
    /// Invalid number literal
    InvalidNumber { text: String },
    /// Maximum nesting depth exceeded
    MaxDepthExceeded { depth: usize, max_depth: usize },
    /// Other parse errors (catch-all for Pest errors we don't specifically handle)
    Other { message: String },
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, span: Span, position: TextPosition) -> Self {
        Self {
            kind,
            span,
            position,
        }
    }

    pub fn message(&self) -> String {
        match &self.kind {
            ParseErrorKind::UnexpectedToken { expected, found } => {
                format!("Expected {}, found {}", expected, found)
            }
            ParseErrorKind::InvalidNumber { text } => {
                format!("Invalid number literal '{}'", text)
            }
            ParseErrorKind::MaxDepthExceeded { max_depth, .. } => {
                format!("Nesting depth exceeds maximum of {} levels", max_depth)
            }
            ParseErrorKind::Other { message } => message.clone(),
        }
    }

    pub fn code(&self) -> &'static str {
        match &self.kind {
            ParseErrorKind::UnexpectedToken { .. } => "P001",
            ParseErrorKind::InvalidNumber { .. } => "P003",
            ParseErrorKind::MaxDepthExceeded { .. } => "P004",
            ParseErrorKind::Other { .. } => "P999",
        }
    }

    pub fn help(&self) -> Option<String> {
        match &self.kind {
            ParseErrorKind::UnexpectedToken { expected, .. } if expected.contains("{{end}}") => {
                Some("Close every `{{when ...}}` marker with `{{end}}`".to_string())
            }
            ParseErrorKind::InvalidNumber { .. } => {
                Some("Integers must fit in 64 bits".to_string())
            }
            ParseErrorKind::MaxDepthExceeded { .. } => {
                Some("Reduce nesting or simplify the template".to_string())
            }
            _ => None,
        }
    }

    /// Convert to a Diagnostic for API boundary
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic {
            severity: Severity::Error,
            message: self.message(),
            span: self.span.clone(),
            related: Vec::new(),
            help: self.help(),
            code: Some(self.code().to_string()),
        }
    }
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} at {} [{}]",
            self.message(),
            self.position,
            self.code()
        )
    }
}

impl std::error::Error for ParseError {}

const STACK_LIMIT_REACHED: &str = "stack limit reached";

/// Convert Pest error to human-readable ParseError
///
/// Pest gives up with "stack limit reached" on input nested far deeper than
/// `max_depth`; that case is reported as [`ParseErrorKind::MaxDepthExceeded`]
/// with `depth` set to the first level past the limit.
pub fn convert_pest_error(
    err: pest::error::Error<Rule>,
    source: &str,
    max_depth: usize,
) -> ParseError {
    use pest::error::ErrorVariant;

    let span = match err.location {
        pest::error::InputLocation::Pos(pos) => Span(pos..pos),
        pest::error::InputLocation::Span((start, end)) => Span(start..end),
    };
    let (line, column) = match err.line_col {
        pest::error::LineColLocation::Pos(pos) => pos,
        pest::error::LineColLocation::Span(start, _) => start,
    };
    let position = TextPosition::new(span.0.start, line, column);

    let kind = match err.variant {
        ErrorVariant::ParsingError {
            positives,
            negatives,
        } => {
            let expected = format_expected_rules(&positives);
            let found = if negatives.is_empty() {
                describe_input(source, span.0.start)
            } else {
                format_found_rules(&negatives)
            };
            ParseErrorKind::UnexpectedToken { expected, found }
        }
        ErrorVariant::CustomError { message } if message == STACK_LIMIT_REACHED => {
            ParseErrorKind::MaxDepthExceeded {
                depth: max_depth.saturating_add(1),
                max_depth,
            }
        }
        ErrorVariant::CustomError { message } => ParseErrorKind::Other { message },
    };

    ParseError::new(kind, span, position)
}

/// Format expected rules in a human-readable way
fn format_expected_rules(rules: &[Rule]) -> String {
    if rules.is_empty() {
        return "something else".to_string();
    }

    // Group related rules into higher-level concepts
    let mut concepts = Vec::new();
    let mut note = |concept: &'static str| {
        if !concepts.contains(&concept) {
            concepts.push(concept);
        }
    };

    for rule in rules {
        match rule {
            Rule::integer
            | Rule::real
            | Rule::boolean
            | Rule::string
            | Rule::void
            | Rule::list
            | Rule::map => note("literal"),
            Rule::ident => note("identifier"),
            Rule::or | Rule::and | Rule::eq | Rule::ne => note("operator"),
            Rule::call_op | Rule::field_op | Rule::index_op => note("'.' or '['"),
            Rule::end_marker | Rule::else_when_open | Rule::else_open => note("'{{end}}'"),
            Rule::marker | Rule::when_block | Rule::text => note("template text or marker"),
            Rule::EOI => note("end of input"),
            _ => note("expression"),
        }
    }

    if concepts.len() == 1 {
        concepts[0].to_string()
    } else {
        let last = concepts.pop().unwrap_or("something else");
        format!("{} or {}", concepts.join(", "), last)
    }
}

/// Format found rules in a human-readable way
fn format_found_rules(rules: &[Rule]) -> String {
    match rules.first() {
        Some(Rule::ident) => "identifier".to_string(),
        Some(Rule::integer) => "integer".to_string(),
        Some(Rule::real) => "real number".to_string(),
        Some(Rule::boolean) => "boolean".to_string(),
        Some(Rule::string) => "string".to_string(),
        Some(Rule::EOI) => "end of input".to_string(),
        Some(rule) => format!("{:?}", rule),
        None => "unexpected token".to_string(),
    }
}

/// Describe the input at `offset` for error messages.
fn describe_input(source: &str, offset: usize) -> String {
    let rest = source.get(offset..).unwrap_or_default();
    if rest.is_empty() {
        return "end of input".to_string();
    }
    let snippet: String = rest
        .chars()
        .take_while(|c| !c.is_whitespace())
        .take(12)
        .collect();
    if snippet.is_empty() {
        "whitespace".to_string()
    } else {
        format!("'{}'", snippet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_to_diagnostic() {
        let error = ParseError::new(
            ParseErrorKind::UnexpectedToken {
                expected: "expression".to_string(),
                found: "','".to_string(),
            },
            Span(10..20),
            TextPosition::new(10, 1, 11),
        );

        let diagnostic = error.to_diagnostic();
        assert_eq!(diagnostic.severity, Severity::Error);
        assert!(diagnostic.message.contains("Expected expression"));
        assert!(diagnostic.message.contains("found ','"));
        assert_eq!(diagnostic.code, Some("P001".to_string()));
        assert_eq!(error.to_string(), "Expected expression, found ',' at 1:11 [P001]");
    }

    #[test]
    fn test_error_codes() {
        let code = |kind| ParseError::new(kind, Span(0..0), TextPosition::default()).code();
        assert_eq!(
            code(ParseErrorKind::UnexpectedToken {
                expected: "expression".to_string(),
                found: "end of input".to_string(),
            }),
            "P001"
        );
        assert_eq!(code(ParseErrorKind::InvalidNumber { text: "9".repeat(20) }), "P003");
        assert_eq!(
            code(ParseErrorKind::MaxDepthExceeded {
                depth: 2,
                max_depth: 1
            }),
            "P004"
        );
        assert_eq!(code(ParseErrorKind::Other { message: String::new() }), "P999");
    }

    #[test]
    fn test_stack_limit_is_reported_as_nesting_depth() {
        let source = "{{when a}}";
        let err = pest::error::Error::new_from_pos(
            pest::error::ErrorVariant::CustomError {
                message: "stack limit reached".to_string(),
            },
            pest::Position::new(source, 2).unwrap(),
        );

        let error = convert_pest_error(err, source, 100);
        assert_eq!(
            error.kind,
            ParseErrorKind::MaxDepthExceeded {
                depth: 101,
                max_depth: 100
            }
        );
        assert_eq!(error.code(), "P004");

        let err = pest::error::Error::new_from_pos(
            pest::error::ErrorVariant::CustomError {
                message: "call limit reached".to_string(),
            },
            pest::Position::new(source, 2).unwrap(),
        );
        assert_eq!(convert_pest_error(err, source, 100).code(), "P999");
    }

    #[test]
    fn test_format_expected_rules() {
        let rules = vec![Rule::integer, Rule::real];
        assert_eq!(format_expected_rules(&rules), "literal");

        let rules = vec![Rule::ident, Rule::integer, Rule::EOI];
        assert_eq!(
            format_expected_rules(&rules),
            "identifier, literal or end of input"
        );
    }

    #[test]
    fn test_describe_input() {
        assert_eq!(describe_input("{{ a", 4), "end of input");
        assert_eq!(describe_input("{{ ,x }}", 3), "',x'");
    }
}
