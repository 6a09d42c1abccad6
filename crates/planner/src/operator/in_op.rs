use crate::{
    error::QueryError,
    joins::Root,
    operator::{Operator, compare::Comparator, criterion::Criterion},
    path::QueryPath,
    query::{ast::expr::Expr, qualified},
};
use model::core::{coerce::coerce_list, kind::ValueKind, value::Value};
use tracing::{debug, warn};

/// Membership operator: the candidate must be among the configured values.
#[derive(Debug, Clone, PartialEq)]
pub struct InOperator {
    name: String,
    arg: Value,
}

impl InOperator {
    pub fn new(arg: impl Into<Value>) -> Self {
        Self::named("in", arg)
    }

    pub fn named(name: &str, arg: impl Into<Value>) -> Self {
        InOperator {
            name: name.to_string(),
            arg: arg.into(),
        }
    }

    /// The configured membership set; a scalar argument is a one-element set.
    pub fn items(&self) -> Option<&[Value]> {
        match &self.arg {
            Value::Null => None,
            Value::List(items) => Some(items),
            scalar => Some(std::slice::from_ref(scalar)),
        }
    }

    fn arguments(&self, kind: ValueKind) -> Result<Vec<Value>, QueryError> {
        match &self.arg {
            Value::Null => Err(QueryError::MissingArgument(self.name.clone())),
            Value::List(items) if items.is_empty() => {
                Err(QueryError::EmptyArgument(self.name.clone()))
            }
            arg => Ok(coerce_list(arg, kind)?),
        }
    }
}

impl Operator for InOperator {
    fn name(&self) -> &str {
        &self.name
    }

    fn test(&self, candidate: &Value) -> bool {
        let Some(items) = self.items() else {
            return false;
        };

        match candidate {
            Value::Null => false,
            // Collection candidates are compared under each configured item's kind.
            Value::List(values) => items
                .iter()
                .any(|item| Comparator::matches_any(item, values)),
            scalar => Comparator::matches_any(scalar, items),
        }
    }

    fn to_criterion(&self, path: &QueryPath) -> Result<Criterion, QueryError> {
        let values = self.arguments(path.property.argument_kind())?;
        debug!(path = %path.path, count = values.len(), "Built `{}` criterion", self.name);

        Ok(Criterion::In {
            path: path.path.clone(),
            values,
        })
    }

    fn to_predicate(&self, root: &Root, path: &QueryPath) -> Result<Expr, QueryError> {
        let property = &path.property;

        if property.is_collection() {
            let values = self.arguments(property.argument_kind())?;
            return Ok(qualified(&root.alias, path.root_column()).in_list(values));
        }

        let values = self.arguments(property.kind)?;

        if let Some(alias) = path.alias.last() {
            if let Some(join) = root.joins.find(alias) {
                debug!(alias = %join.alias, table = %join.table, "Building `{}` predicate against join", self.name);
                return Ok(qualified(&join.alias, property.field_name()).in_list(values));
            }
            warn!(
                alias = %alias,
                path = %path.path,
                "No join registered for alias, building predicate against the root path"
            );
        }

        Ok(qualified(&root.alias, path.root_column()).in_list(values))
    }
}
