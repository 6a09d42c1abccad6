//! Filter expressions of the form `path:operator:argument`.

use crate::error::QueryError;
use model::core::value::Value;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub mod plan;

/// A parsed, not yet resolved filter.
///
/// Arguments stay untyped strings until the filter is planned against a schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Filter {
    pub path: String,
    pub operator: String,
    pub arg: Value,
}

impl Filter {
    pub fn new(path: &str, operator: &str, arg: impl Into<Value>) -> Self {
        Filter {
            path: path.to_string(),
            operator: operator.to_string(),
            arg: arg.into(),
        }
    }

    /// Parses `path:operator:argument`. The argument is either a single token or
    /// a bracketed, comma separated list such as `[A,B,C]`.
    pub fn parse(input: &str) -> Result<Filter, QueryError> {
        let invalid = || QueryError::InvalidFilter(input.to_string());

        let mut parts = input.splitn(3, ':');
        let path = parts.next().map(str::trim).filter(|p| !p.is_empty());
        let operator = parts.next().map(str::trim).filter(|o| !o.is_empty());
        let (Some(path), Some(operator)) = (path, operator) else {
            return Err(invalid());
        };

        let arg = match parts.next().map(str::trim) {
            None => return Err(invalid()),
            Some(raw) => parse_argument(raw).ok_or_else(invalid)?,
        };

        Ok(Filter::new(path, operator, arg))
    }
}

impl FromStr for Filter {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Filter::parse(s)
    }
}

fn parse_argument(raw: &str) -> Option<Value> {
    match (raw.strip_prefix('['), raw.ends_with(']')) {
        (Some(rest), true) => {
            let inner = rest[..rest.len() - 1].trim();
            if inner.is_empty() {
                return Some(Value::List(Vec::new()));
            }
            let items = inner
                .split(',')
                .map(str::trim)
                .map(|item| (!item.is_empty()).then(|| Value::String(item.to_string())))
                .collect::<Option<Vec<_>>>()?;
            Some(Value::List(items))
        }
        (None, false) if !raw.is_empty() => Some(Value::String(raw.to_string())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_argument() {
        let filter = Filter::parse("code:in:[A, B,C]").unwrap();
        assert_eq!(filter.path, "code");
        assert_eq!(filter.operator, "in");
        assert_eq!(filter.arg, Value::from(vec!["A", "B", "C"]));
    }

    #[test]
    fn test_parse_single_argument_keeps_colons() {
        let filter: Filter = "created:in:2024-01-01T10:00:00".parse().unwrap();
        assert_eq!(filter.arg, Value::from("2024-01-01T10:00:00"));
    }

    #[test]
    fn test_parse_empty_list() {
        let filter = Filter::parse("program.code:in:[]").unwrap();
        assert_eq!(filter.path, "program.code");
        assert_eq!(filter.arg, Value::List(vec![]));
    }

    #[test]
    fn test_parse_invalid_filters() {
        for input in [
            "code",
            "code:in",
            ":in:[A]",
            "code::[A]",
            "code:in:",
            "code:in:[A",
            "code:in:[A,,B]",
            "code:in:[,]",
            "code:in:[A, ]",
        ] {
            assert!(
                matches!(Filter::parse(input), Err(QueryError::InvalidFilter(_))),
                "expected `{input}` to be rejected"
            );
        }
    }
}
