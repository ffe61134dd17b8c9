use crate::parser::{BoolOp, ComparisonOp, UnaryOp};

/// Parsed expression of a template marker.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(Literal),
    Ident(String),
    List(Vec<Expr>),
    Map(Vec<(Expr, Expr)>),
    Unary {
        op: UnaryOp,
        expr: Box<Expr>,
    },
    Boolean {
        op: BoolOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Comparison {
        op: ComparisonOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// `value[index]`
    Index {
        value: Box<Expr>,
        index: Box<Expr>,
    },
    /// `value.field`, a fetch with a string key.
    Field {
        value: Box<Expr>,
        field: String,
    },
    /// `receiver.method(args)`
    Call {
        receiver: Box<Expr>,
        method: String,
        args: Vec<Expr>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Void,
    Boolean(bool),
    Integer(i64),
    Real(f64),
    String(String),
}

impl Expr {
    /// The literal `true`, used as the condition of an `{{else}}` branch.
    pub fn always() -> Self {
        Expr::Literal(Literal::Boolean(true))
    }
}
