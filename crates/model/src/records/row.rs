use crate::core::value::{FieldValue, Value};
use serde::{Deserialize, Serialize};

/// A materialized record of an entity, as returned by a query or loaded for post-filtering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RowData {
    pub entity: String,
    pub field_values: Vec<FieldValue>,
}

impl RowData {
    pub fn new(entity: &str, field_values: Vec<FieldValue>) -> Self {
        RowData {
            entity: entity.to_string(),
            field_values,
        }
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.field_values
            .iter()
            .find(|f| f.name.eq_ignore_ascii_case(field))
    }

    pub fn get_value(&self, field: &str) -> Value {
        self.get(field)
            .and_then(|f| f.value.clone())
            .unwrap_or(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        let row = RowData::new(
            "program",
            vec![FieldValue::new("Code", "P1"), FieldValue::new("version", 2i64)],
        );

        assert_eq!(row.get_value("code"), Value::from("P1"));
        assert_eq!(row.get_value("VERSION"), Value::Int(2));
        assert_eq!(row.get_value("missing"), Value::Null);
    }
}
