//! Filter operators: in-memory evaluation and translation into query predicates.

use crate::{error::QueryError, joins::Root, path::QueryPath, query::ast::expr::Expr};
use model::core::value::Value;

pub mod compare;
pub mod criterion;
pub mod in_op;

use criterion::Criterion;
use in_op::InOperator;

/// A named, typed comparison rule applied to a query filter.
pub trait Operator: std::fmt::Debug + Send + Sync {
    fn name(&self) -> &str;

    /// Evaluates the operator against a materialized value. Absent values never match.
    fn test(&self, candidate: &Value) -> bool;

    /// Translates the operator into a flat restriction on the query path.
    fn to_criterion(&self, path: &QueryPath) -> Result<Criterion, QueryError>;

    /// Translates the operator into a SQL predicate against the root or one of its joins.
    fn to_predicate(&self, root: &Root, path: &QueryPath) -> Result<Expr, QueryError>;
}

/// Instantiates an operator by its filter name.
pub fn create(name: &str, arg: Value) -> Result<Box<dyn Operator>, QueryError> {
    match name {
        "in" => Ok(Box::new(InOperator::new(arg))),
        other => Err(QueryError::UnknownOperator(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_known_and_unknown() {
        let op = create("in", Value::from(vec!["a"])).unwrap();
        assert_eq!(op.name(), "in");
        assert!(op.test(&Value::from("a")));

        assert!(matches!(
            create("like", Value::from("a")),
            Err(QueryError::UnknownOperator(_))
        ));
    }
}
