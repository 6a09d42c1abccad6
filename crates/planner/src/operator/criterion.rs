use crate::{
    operator::compare::Comparator,
    query::{ast::expr::Expr, ident, qualified},
};
use model::{core::value::Value, records::row::RowData};

/// A flat restriction on a property path, independent of any join structure.
#[derive(Debug, Clone, PartialEq)]
pub enum Criterion {
    In { path: String, values: Vec<Value> },
}

impl Criterion {
    pub fn path(&self) -> &str {
        match self {
            Criterion::In { path, .. } => path,
        }
    }

    /// Lowers the restriction into a SQL expression, optionally qualified by a table alias.
    pub fn into_expr(self, qualifier: Option<&str>) -> Expr {
        match self {
            Criterion::In { path, values } => {
                let column = match qualifier {
                    Some(q) => qualified(q, &path),
                    None => ident(&path),
                };
                column.in_list(values)
            }
        }
    }

    /// Checks a materialized row against the restriction.
    pub fn test(&self, row: &RowData) -> bool {
        match self {
            Criterion::In { path, values } => match row.get_value(path) {
                Value::Null => false,
                Value::List(items) => values
                    .iter()
                    .any(|value| Comparator::matches_any(value, &items)),
                scalar => Comparator::matches_any(&scalar, values),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{dialect::Postgres, renderer::render};
    use model::core::value::FieldValue;

    fn criterion() -> Criterion {
        Criterion::In {
            path: "code".to_string(),
            values: vec![Value::from("A"), Value::from("B")],
        }
    }

    #[test]
    fn test_into_expr_renders_in_list() {
        let (sql, params) = render(&criterion().into_expr(Some("de")), &Postgres);
        assert_eq!(sql, r#"("de"."code" IN ($1, $2))"#);
        assert_eq!(params.len(), 2);

        let (sql, _) = render(&criterion().into_expr(None), &Postgres);
        assert_eq!(sql, r#"("code" IN ($1, $2))"#);
    }

    #[test]
    fn test_matches_rows() {
        let hit = RowData::new("dataElement", vec![FieldValue::new("code", "B")]);
        let miss = RowData::new("dataElement", vec![FieldValue::new("code", "C")]);
        let empty = RowData::new("dataElement", vec![]);

        assert!(criterion().test(&hit));
        assert!(!criterion().test(&miss));
        assert!(!criterion().test(&empty));
        assert_eq!(criterion().path(), "code");
    }

    #[test]
    fn test_matches_collection_rows_under_value_kind() {
        let criterion = Criterion::In {
            path: "ages".to_string(),
            values: vec![Value::Int(5)],
        };
        let hit = RowData::new(
            "patient",
            vec![FieldValue::new(
                "ages",
                Value::List(vec![Value::from("4"), Value::from("5")]),
            )],
        );
        let miss = RowData::new(
            "patient",
            vec![FieldValue::new("ages", Value::List(vec![Value::from("x")]))],
        );

        assert!(criterion.test(&hit));
        assert!(!criterion.test(&miss));
    }
}
