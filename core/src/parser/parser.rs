use crate::api::ParseOptions;
use crate::expression::Expression;
use crate::parser::error::convert_pest_error;
use crate::parser::{
    BoolOp, ComparisonOp, Expr, Literal, ParseError, ParseErrorKind, Span, TextPosition, UnaryOp,
};
use crate::template::{ElementKind, TemplateElement, WhenBranch};
use lazy_static::lazy_static;
use pest::Parser;
use pest::iterators::{Pair, Pairs};
use pest::pratt_parser::{Assoc, Op, PrattParser};
use pest_derive::Parser;

lazy_static! {
    // Note: precedence is defined lowest to highest.
    static ref PRATT_PARSER: PrattParser<Rule> = PrattParser::new()
        // (lowest precedence)
        .op(Op::infix(Rule::or, Assoc::Left))            // `or`, `||`
        .op(Op::infix(Rule::and, Assoc::Left))           // `and`, `&&`
        .op(Op::prefix(Rule::not))                       // `not`, `!`

        .op(
            Op::infix(Rule::eq, Assoc::Left) |
            Op::infix(Rule::ne, Assoc::Left)
        )                                                // `==`, `!=`
        .op(Op::prefix(Rule::neg))                       // `-`

        // Postfix operators.
        .op(
            Op::postfix(Rule::call_op) |
            Op::postfix(Rule::field_op) |
            Op::postfix(Rule::index_op)
        )                                                // `.m()`, `.f`, `[]`
        // (highest precedence)
        ;
}

#[derive(Parser)]
#[grammar = "parser/template.pest"]
pub struct TemplateParser;

/// Parses a whole template into its element tree.
pub fn parse_template(
    source: &str,
    options: &ParseOptions,
) -> Result<Vec<TemplateElement>, ParseError> {
    let mut pairs = TemplateParser::parse(Rule::template, source)
        .map_err(|err| convert_pest_error(err, source, options.max_nesting_depth))?;
    let builder = TreeBuilder::new(options);
    let template = builder.next_pair(&mut pairs, source_span(source), "template")?;
    let span = template.as_span();
    let elements = builder.next_pair(&mut template.into_inner(), span, "template elements")?;
    builder.build_elements(elements, 0)
}

/// Parses a single expression statement, e.g. `user.name.isBlank()`.
pub fn parse_statement(text: &str, options: &ParseOptions) -> Result<Expr, ParseError> {
    let mut pairs = TemplateParser::parse(Rule::statement, text)
        .map_err(|err| convert_pest_error(err, text, options.max_nesting_depth))?;
    let builder = TreeBuilder::new(options);
    let statement = builder.next_pair(&mut pairs, source_span(text), "statement")?;
    let span = statement.as_span();
    let expression = builder.next_pair(&mut statement.into_inner(), span, "expression")?;
    builder.build_expression(expression, 1)
}

fn source_span(source: &str) -> pest::Span<'_> {
    // `0..0` is always a valid span.
    pest::Span::new(source, 0, 0).unwrap_or_else(|| unreachable!())
}

struct TreeBuilder {
    max_depth: usize,
}

impl TreeBuilder {
    fn new(options: &ParseOptions) -> Self {
        Self {
            max_depth: options.max_nesting_depth,
        }
    }

    fn build_elements(
        &self,
        pair: Pair<Rule>,
        depth: usize,
    ) -> Result<Vec<TemplateElement>, ParseError> {
        pair.into_inner()
            .map(|element| self.build_element(element, depth))
            .collect()
    }

    fn build_element(&self, pair: Pair<Rule>, depth: usize) -> Result<TemplateElement, ParseError> {
        let span = pair.as_span();
        let kind = match pair.as_rule() {
            Rule::text => ElementKind::Text,
            Rule::marker => ElementKind::Marker(self.build_marker_expression(pair)?),
            Rule::when_block => {
                if depth + 1 > self.max_depth {
                    return Err(self.depth_error(span, depth + 1));
                }
                ElementKind::When(self.build_branches(pair, depth + 1)?)
            }
            rule => unreachable!("Unknown template element: {:?}", rule),
        };
        Ok(TemplateElement {
            position: TextPosition::from(span.start_pos()),
            span: Span::from(span),
            text: span.as_str().to_string(),
            kind,
        })
    }

    fn build_branches(&self, pair: Pair<Rule>, depth: usize) -> Result<Vec<WhenBranch>, ParseError> {
        let span = pair.as_span();
        let mut inner = pair.into_inner();
        let mut branches = Vec::new();

        // `{{when cond}}` is directly followed by its own elements.
        let opener = self.next_pair(&mut inner, span, "when marker")?;
        let elements = self.next_pair(&mut inner, span, "when body")?;
        branches.push(self.build_branch(opener, elements, depth)?);

        for part in inner {
            match part.as_rule() {
                Rule::else_when | Rule::else_branch => {
                    let part_span = part.as_span();
                    let mut pieces = part.into_inner();
                    let opener = self.next_pair(&mut pieces, part_span, "else marker")?;
                    let elements = self.next_pair(&mut pieces, part_span, "else body")?;
                    branches.push(self.build_branch(opener, elements, depth)?);
                }
                Rule::end_marker => {}
                rule => unreachable!("Unknown when block part: {:?}", rule),
            }
        }
        Ok(branches)
    }

    fn build_branch(
        &self,
        opener: Pair<Rule>,
        elements: Pair<Rule>,
        depth: usize,
    ) -> Result<WhenBranch, ParseError> {
        let span = opener.as_span();
        let condition = match opener.as_rule() {
            Rule::else_open => Expression::new("true", Expr::always(), Span::from(span)),
            _ => self.build_marker_expression(opener)?,
        };
        Ok(WhenBranch {
            position: TextPosition::from(span.start_pos()),
            text: span.as_str().to_string(),
            condition,
            elements: self.build_elements(elements, depth)?,
        })
    }

    /// Finds the expression inside a marker, skipping any keywords.
    fn build_marker_expression(&self, marker: Pair<Rule>) -> Result<Expression, ParseError> {
        let span = marker.as_span();
        let expression = marker
            .into_inner()
            .find(|pair| pair.as_rule() == Rule::expression)
            .ok_or_else(|| self.missing(span, "marker expression"))?;
        let statement = expression.as_str().to_string();
        let expr_span = Span::from(expression.as_span());
        let condition = self.build_expression(expression, 1)?;
        Ok(Expression::new(statement, condition, expr_span))
    }

    fn build_expression(&self, pair: Pair<Rule>, depth: usize) -> Result<Expr, ParseError> {
        if depth > self.max_depth {
            return Err(self.depth_error(pair.as_span(), depth));
        }
        PRATT_PARSER
            .map_primary(|primary| self.build_primary(primary, depth))
            .map_prefix(|op, rhs| {
                let op = match op.as_rule() {
                    Rule::neg => UnaryOp::Neg,
                    Rule::not => UnaryOp::Not,
                    rule => unreachable!("Unknown prefix operator: {:?}", rule),
                };
                Ok(Expr::Unary {
                    op,
                    expr: Box::new(rhs?),
                })
            })
            .map_postfix(|lhs, op| self.build_postfix(lhs?, op, depth))
            .map_infix(|lhs, op, rhs| {
                let left = Box::new(lhs?);
                let right = Box::new(rhs?);
                Ok(match op.as_rule() {
                    Rule::or => Expr::Boolean {
                        op: BoolOp::Or,
                        left,
                        right,
                    },
                    Rule::and => Expr::Boolean {
                        op: BoolOp::And,
                        left,
                        right,
                    },
                    Rule::eq => Expr::Comparison {
                        op: ComparisonOp::Eq,
                        left,
                        right,
                    },
                    Rule::ne => Expr::Comparison {
                        op: ComparisonOp::Neq,
                        left,
                        right,
                    },
                    rule => unreachable!("Unknown binary operator: {:?}", rule),
                })
            })
            .parse(pair.into_inner())
    }

    fn build_primary(&self, pair: Pair<Rule>, depth: usize) -> Result<Expr, ParseError> {
        let span = pair.as_span();
        match pair.as_rule() {
            Rule::integer => pair
                .as_str()
                .parse::<i64>()
                .map(|n| Expr::Literal(Literal::Integer(n)))
                .map_err(|_| self.invalid_number(span)),
            Rule::real => pair
                .as_str()
                .parse::<f64>()
                .map(|n| Expr::Literal(Literal::Real(n)))
                .map_err(|_| self.invalid_number(span)),
            Rule::boolean => Ok(Expr::Literal(Literal::Boolean(pair.as_str() == "true"))),
            Rule::void => Ok(Expr::Literal(Literal::Void)),
            Rule::string => {
                let body = pair.into_inner().next().map(|p| p.as_str()).unwrap_or_default();
                Ok(Expr::Literal(Literal::String(unescape(body))))
            }
            Rule::ident => Ok(Expr::Ident(pair.as_str().to_string())),
            Rule::list => pair
                .into_inner()
                .map(|item| self.build_expression(item, depth + 1))
                .collect::<Result<Vec<_>, _>>()
                .map(Expr::List),
            Rule::map => pair
                .into_inner()
                .map(|entry| self.build_map_entry(entry, depth + 1))
                .collect::<Result<Vec<_>, _>>()
                .map(Expr::Map),
            Rule::grouped => {
                let inner = self.next_pair(&mut pair.into_inner(), span, "grouped expression")?;
                self.build_expression(inner, depth + 1)
            }
            rule => unreachable!("Unknown primary expression: {:?}", rule),
        }
    }

    fn build_map_entry(&self, pair: Pair<Rule>, depth: usize) -> Result<(Expr, Expr), ParseError> {
        let span = pair.as_span();
        let mut inner = pair.into_inner();
        let key = self.build_expression(self.next_pair(&mut inner, span, "map key")?, depth)?;
        let value = self.build_expression(self.next_pair(&mut inner, span, "map value")?, depth)?;
        Ok((key, value))
    }

    fn build_postfix(&self, lhs: Expr, op: Pair<Rule>, depth: usize) -> Result<Expr, ParseError> {
        let span = op.as_span();
        let rule = op.as_rule();
        let mut inner = op.into_inner();
        match rule {
            Rule::field_op => {
                let field = self.next_pair(&mut inner, span, "field name")?;
                Ok(Expr::Field {
                    value: Box::new(lhs),
                    field: field.as_str().to_string(),
                })
            }
            Rule::index_op => {
                let index = self.next_pair(&mut inner, span, "index expression")?;
                Ok(Expr::Index {
                    value: Box::new(lhs),
                    index: Box::new(self.build_expression(index, depth + 1)?),
                })
            }
            Rule::call_op => {
                let method = self.next_pair(&mut inner, span, "method name")?;
                let args = inner
                    .map(|arg| self.build_expression(arg, depth + 1))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Expr::Call {
                    receiver: Box::new(lhs),
                    method: method.as_str().to_string(),
                    args,
                })
            }
            rule => unreachable!("Unknown postfix operator: {:?}", rule),
        }
    }

    fn next_pair<'i>(
        &self,
        pairs: &mut Pairs<'i, Rule>,
        span: pest::Span<'_>,
        what: &str,
    ) -> Result<Pair<'i, Rule>, ParseError> {
        pairs.next().ok_or_else(|| self.missing(span, what))
    }

    fn missing(&self, span: pest::Span<'_>, what: &str) -> ParseError {
        ParseError::new(
            ParseErrorKind::Other {
                message: format!("Missing {} in parse tree", what),
            },
            Span::from(span),
            TextPosition::from(span.start_pos()),
        )
    }

    fn invalid_number(&self, span: pest::Span<'_>) -> ParseError {
        ParseError::new(
            ParseErrorKind::InvalidNumber {
                text: span.as_str().to_string(),
            },
            Span::from(span),
            TextPosition::from(span.start_pos()),
        )
    }

    fn depth_error(&self, span: pest::Span<'_>, depth: usize) -> ParseError {
        ParseError::new(
            ParseErrorKind::MaxDepthExceeded {
                depth,
                max_depth: self.max_depth,
            },
            Span::from(span),
            TextPosition::from(span.start_pos()),
        )
    }
}

/// Resolves backslash escapes in a string literal body.
fn unescape(body: &str) -> String {
    let mut result = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => result.push('\n'),
            Some('t') => result.push('\t'),
            Some('r') => result.push('\r'),
            // The grammar only admits the escapes above plus literal quotes, braces and `\`.
            Some(other) => result.push(other),
            None => result.push('\\'),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(text: &str) -> Expr {
        parse_statement(text, &ParseOptions::default()).unwrap()
    }

    #[test]
    fn test_unescape() {
        assert_eq!(unescape(r"a\nb"), "a\nb");
        assert_eq!(unescape(r#"say \"hi\""#), "say \"hi\"");
        assert_eq!(unescape(r"\{\{"), "{{");
        assert_eq!(unescape(r"back\\slash"), "back\\slash");
    }

    #[test]
    fn test_integer_overflow_is_invalid_number() {
        let err = parse_statement("99999999999999999999", &ParseOptions::default()).unwrap_err();
        assert_eq!(
            err.kind,
            ParseErrorKind::InvalidNumber {
                text: "99999999999999999999".to_string()
            }
        );
        assert_eq!(err.code(), "P003");
    }

    #[test]
    fn test_negative_literal_is_negation() {
        assert_eq!(
            parse("-5"),
            Expr::Unary {
                op: UnaryOp::Neg,
                expr: Box::new(Expr::Literal(Literal::Integer(5))),
            }
        );
    }

    #[test]
    fn test_source_span() {
        assert_eq!(source_span("abc").as_str(), "");
    }
}
