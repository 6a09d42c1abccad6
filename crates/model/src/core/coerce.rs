use crate::{
    core::{kind::ValueKind, value::Value},
    error::CoercionError,
};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Converts `value` into the given kind.
///
/// Strings parse into the target kind, integers widen to floats, floats without a
/// fractional part narrow to integers and every scalar has a string form.
pub fn coerce(value: &Value, kind: ValueKind) -> Result<Value, CoercionError> {
    if value.is_null() {
        return Err(CoercionError::Null(kind));
    }

    let coerced = match kind {
        ValueKind::String => value.as_string().map(Value::String),
        ValueKind::Boolean => value.as_bool().map(Value::Boolean),
        ValueKind::Integer => value.as_i64().map(Value::Int),
        ValueKind::Float => value.as_f64().map(Value::Float),
        ValueKind::Date => coerce_temporal(value),
        ValueKind::Enum => match value {
            Value::Enum(_, _) => Some(value.clone()),
            Value::List(_) => None,
            other => other
                .as_string()
                .map(|constant| Value::Enum(String::new(), constant)),
        },
        ValueKind::Unknown => return Err(CoercionError::UnsupportedKind(kind)),
    };

    coerced.ok_or_else(|| CoercionError::Incompatible {
        value: value.to_string(),
        kind,
    })
}

/// Converts a list argument into a list of values of the given kind.
///
/// A scalar is treated as a one-element list. The first element that fails to convert
/// aborts the conversion.
pub fn coerce_list(value: &Value, kind: ValueKind) -> Result<Vec<Value>, CoercionError> {
    match value {
        Value::Null => Err(CoercionError::Null(kind)),
        Value::List(items) => items.iter().map(|item| coerce(item, kind)).collect(),
        scalar => Ok(vec![coerce(scalar, kind)?]),
    }
}

/// Temporal values compare on a common UTC timeline; a plain date sits at midnight.
pub fn to_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::Timestamp(ts) => Some(*ts),
        Value::Date(date) => date
            .and_hms_opt(0, 0, 0)
            .map(|naive| DateTime::<Utc>::from_naive_utc_and_offset(naive, Utc)),
        _ => None,
    }
}

fn coerce_temporal(value: &Value) -> Option<Value> {
    match value {
        Value::Date(_) | Value::Timestamp(_) => Some(value.clone()),
        Value::String(raw) => {
            let raw = raw.trim();
            if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
                return Some(Value::Date(date));
            }
            parse_datetime(raw).map(Value::Timestamp)
        }
        _ => None,
    }
}

fn parse_datetime(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    parse_naive_datetime(raw).map(|naive| DateTime::<Utc>::from_naive_utc_and_offset(naive, Utc))
}

fn parse_naive_datetime(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S"))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f"))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
        .ok()
}
