//! Defines the AST for SQL expressions.

use model::core::value::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A column, optionally qualified by a table alias, e.g. `e.uid`.
    Identifier(Ident),

    /// A literal value, bound as a query parameter.
    Value(Value),

    /// A binary operation, e.g. `e.programid = program.programid` or `a AND b`.
    BinaryOp(Box<BinaryOp>),

    /// A membership test, e.g., `code IN ('A', 'B')`.
    InList {
        expr: Box<Expr>,
        list: Vec<Expr>,
        negated: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    pub qualifier: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryOp {
    pub left: Expr,
    pub op: BinaryOperator,
    pub right: Expr,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    Eq,
    NotEq,
    And,
    Or,
}

impl Expr {
    /// Joins two conditions with `AND`.
    pub fn and(self, other: Expr) -> Expr {
        Expr::BinaryOp(Box::new(BinaryOp {
            left: self,
            op: BinaryOperator::And,
            right: other,
        }))
    }

    /// Builds `self = other`.
    pub fn equals(self, other: Expr) -> Expr {
        Expr::BinaryOp(Box::new(BinaryOp {
            left: self,
            op: BinaryOperator::Eq,
            right: other,
        }))
    }

    pub fn in_list(self, list: Vec<Value>) -> Expr {
        Expr::InList {
            expr: Box::new(self),
            list: list.into_iter().map(Expr::Value).collect(),
            negated: false,
        }
    }
}
