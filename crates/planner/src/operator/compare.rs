//! Kind-aware equality used by membership operators.
//!
//! A comparator is picked once from the kind of the probed value; the other side
//! is coerced into that kind before comparing. Coercion failures never match.

use model::core::{
    coerce::{coerce, to_timestamp},
    kind::ValueKind,
    value::Value,
};

/// `lside` is coerced into the comparator's kind, `rside` already has it.
pub type EqualityFn = fn(lside: &Value, rside: &Value) -> bool;

#[derive(Clone, Copy)]
pub struct Comparator {
    kind: ValueKind,
    eq: EqualityFn,
}

impl Comparator {
    pub fn for_kind(kind: ValueKind) -> Comparator {
        let eq: EqualityFn = match kind {
            ValueKind::String => string_eq,
            ValueKind::Boolean => boolean_eq,
            ValueKind::Integer => integer_eq,
            ValueKind::Float => float_eq,
            ValueKind::Date => date_eq,
            ValueKind::Enum => enum_eq,
            ValueKind::Unknown => never_eq,
        };
        Comparator { kind, eq }
    }

    pub fn for_value(value: &Value) -> Comparator {
        Self::for_kind(value.kind())
    }

    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    pub fn equal(&self, lside: &Value, rside: &Value) -> bool {
        (self.eq)(lside, rside)
    }

    /// True when any of `items` equals `probe` under the probe's kind.
    pub fn matches_any(probe: &Value, items: &[Value]) -> bool {
        let comparator = Self::for_value(probe);
        items.iter().any(|item| comparator.equal(item, probe))
    }
}

impl std::fmt::Debug for Comparator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Comparator").field("kind", &self.kind).finish()
    }
}

fn coerced(value: &Value, kind: ValueKind) -> Option<Value> {
    coerce(value, kind).ok()
}

fn string_eq(lside: &Value, rside: &Value) -> bool {
    coerced(lside, ValueKind::String).as_ref() == Some(rside)
}

fn boolean_eq(lside: &Value, rside: &Value) -> bool {
    coerced(lside, ValueKind::Boolean).as_ref() == Some(rside)
}

fn integer_eq(lside: &Value, rside: &Value) -> bool {
    coerced(lside, ValueKind::Integer).as_ref() == Some(rside)
}

// Bitwise: NaN equals NaN, 0.0 differs from -0.0.
fn float_eq(lside: &Value, rside: &Value) -> bool {
    match (coerced(lside, ValueKind::Float), rside) {
        (Some(Value::Float(a)), Value::Float(b)) => a.to_bits() == b.to_bits(),
        _ => false,
    }
}

fn date_eq(lside: &Value, rside: &Value) -> bool {
    let lside = coerced(lside, ValueKind::Date);
    match (lside.as_ref().and_then(to_timestamp), to_timestamp(rside)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

// Enumerations compare by constant name only, so constants of different
// enumeration types with the same name are equal.
fn enum_eq(lside: &Value, rside: &Value) -> bool {
    match (lside.as_string(), rside.as_string()) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

fn never_eq(_: &Value, _: &Value) -> bool {
    false
}
