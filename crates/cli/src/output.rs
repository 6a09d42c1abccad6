//! Conversion between plain JSON documents and typed rows, and report output.

use crate::error::CliError;
use model::{
    core::value::{FieldValue, Value},
    records::row::RowData,
};
use serde::Serialize;
use serde_json::{Map, Number, Value as Json};

/// Reads a JSON array of objects as rows of `entity`. `null` fields are absent values.
///
/// Nested objects are flattened into dotted field names, so `{"program":{"code":"P1"}}`
/// yields a `program.code` field that filters crossing the reference can read.
pub fn rows_from_json(entity: &str, json: &str) -> Result<Vec<RowData>, CliError> {
    let documents: Vec<Json> = serde_json::from_str(json)?;

    documents
        .into_iter()
        .enumerate()
        .map(|(i, doc)| match doc {
            Json::Object(fields) => {
                let mut values = Vec::with_capacity(fields.len());
                flatten(None, fields, &mut values);
                Ok(RowData::new(entity, values))
            }
            _ => Err(CliError::InvalidRow(i)),
        })
        .collect()
}

fn flatten(prefix: Option<&str>, fields: Map<String, Json>, out: &mut Vec<FieldValue>) {
    for (name, value) in fields {
        let name = match prefix {
            Some(prefix) => format!("{prefix}.{name}"),
            None => name,
        };
        match value {
            Json::Object(nested) => flatten(Some(&name), nested, out),
            value => out.push(FieldValue {
                name,
                value: to_value(value),
            }),
        }
    }
}

pub fn rows_to_json(rows: &[RowData]) -> Json {
    Json::Array(
        rows.iter()
            .map(|row| {
                let fields: Map<String, Json> = row
                    .field_values
                    .iter()
                    .map(|f| (f.name.clone(), f.value.as_ref().map_or(Json::Null, to_json)))
                    .collect();
                Json::Object(fields)
            })
            .collect(),
    )
}

pub fn to_json(value: &Value) -> Json {
    match value {
        Value::Int(v) => Json::from(*v),
        Value::Float(v) => Number::from_f64(*v).map_or(Json::Null, Json::Number),
        Value::String(v) => Json::String(v.clone()),
        Value::Boolean(v) => Json::Bool(*v),
        Value::Date(v) => Json::String(v.format("%Y-%m-%d").to_string()),
        Value::Timestamp(v) => Json::String(v.to_rfc3339()),
        Value::Enum(_, v) => Json::String(v.clone()),
        Value::List(items) => Json::Array(items.iter().map(to_json).collect()),
        Value::Null => Json::Null,
    }
}

fn to_value(json: Json) -> Option<Value> {
    match json {
        Json::Null => None,
        Json::Bool(v) => Some(Value::Boolean(v)),
        Json::Number(n) => n
            .as_i64()
            .map(Value::Int)
            .or_else(|| n.as_f64().map(Value::Float)),
        Json::String(v) => Some(Value::String(v)),
        Json::Array(items) => Some(Value::List(
            items
                .into_iter()
                .map(|item| to_value(item).unwrap_or(Value::Null))
                .collect(),
        )),
        // Objects inside arrays have no field name to flatten into.
        obj @ Json::Object(_) => Some(Value::String(obj.to_string())),
    }
}

/// Pretty-prints `data` to `path`, or to stdout when no path is given.
pub fn emit<T: Serialize + ?Sized>(data: &T, path: Option<&str>) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(data).map_err(CliError::JsonSerialize)?;
    match path {
        Some(path) => std::fs::write(path, json)?,
        None => println!("{json}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_round_trip_through_json() {
        let rows = rows_from_json(
            "event",
            r#"[{ "uid": "ev1", "score": 2.5, "count": 3, "done": true, "tags": ["a"], "note": null }]"#,
        )
        .unwrap();

        let row = &rows[0];
        assert_eq!(row.get_value("count"), Value::Int(3));
        assert_eq!(row.get_value("score"), Value::Float(2.5));
        assert_eq!(row.get_value("tags"), Value::from(vec!["a"]));
        assert_eq!(row.get("note").unwrap().value, None);

        let json = rows_to_json(&rows);
        assert_eq!(json[0]["done"], Json::Bool(true));
        assert_eq!(json[0]["note"], Json::Null);
    }

    #[test]
    fn test_non_object_row_is_rejected() {
        assert!(matches!(
            rows_from_json("event", r#"[{}, 3]"#),
            Err(CliError::InvalidRow(1))
        ));
    }

    #[test]
    fn test_nested_objects_flatten_into_dotted_fields() {
        let rows = rows_from_json(
            "enrollment",
            r#"[{ "uid": "en1", "program": { "code": "P1", "stage": { "uid": "ps1" } } }]"#,
        )
        .unwrap();

        let row = &rows[0];
        assert_eq!(row.get_value("program.code"), Value::from("P1"));
        assert_eq!(row.get_value("program.stage.uid"), Value::from("ps1"));
        assert!(row.get("program").is_none());
    }

    #[test]
    fn test_filters_crossing_references_match_nested_rows() {
        use model::schema::registry::SchemaRegistry;
        use planner::filter::{Filter, plan::FilterPlan};

        let registry = SchemaRegistry::from_json(
            r#"[
                { "name": "enrollment", "table": "enrollment", "properties": [
                    { "name": "uid", "kind": "string" },
                    { "name": "program", "field_name": "programid", "kind": "string", "reference": "program" }
                ] },
                { "name": "program", "table": "program", "properties": [
                    { "name": "code", "kind": "string" }
                ] }
            ]"#,
        )
        .unwrap();
        let filters = vec![Filter::parse("program.code:in:[P1]").unwrap()];
        let plan = FilterPlan::build(&registry, "enrollment", &filters).unwrap();

        let rows = rows_from_json(
            "enrollment",
            r#"[
                { "uid": "en1", "program": { "code": "P1" } },
                { "uid": "en2", "program": { "code": "P2" } }
            ]"#,
        )
        .unwrap();

        let kept = plan.apply(rows);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].get_value("uid"), Value::from("en1"));
    }
}
