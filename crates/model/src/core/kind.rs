use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fmt, str::FromStr};

/// Declared kind of a comparison value or of a schema attribute.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum ValueKind {
    String,
    Boolean,
    Integer,
    Float,
    Date,
    Enum,
    /// No comparison semantics (null, nested lists, unmapped attribute types).
    Unknown,
}

lazy_static! {
    static ref KIND_NAMES: HashMap<&'static str, ValueKind> = build_kind_map();
}

impl ValueKind {
    pub fn name(&self) -> &'static str {
        match self {
            ValueKind::String => "string",
            ValueKind::Boolean => "boolean",
            ValueKind::Integer => "integer",
            ValueKind::Float => "float",
            ValueKind::Date => "date",
            ValueKind::Enum => "enum",
            ValueKind::Unknown => "unknown",
        }
    }
}

impl FromStr for ValueKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        KIND_NAMES
            .get(s.trim().to_lowercase().as_str())
            .copied()
            .ok_or_else(|| format!("Unknown value kind: {s}"))
    }
}

impl TryFrom<String> for ValueKind {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

fn build_kind_map() -> HashMap<&'static str, ValueKind> {
    use ValueKind::*;

    let entries = [
        ("string", String),
        ("text", String),
        ("varchar", String),
        ("boolean", Boolean),
        ("bool", Boolean),
        ("integer", Integer),
        ("int", Integer),
        ("long", Integer),
        ("float", Float),
        ("double", Float),
        ("number", Float),
        ("date", Date),
        ("datetime", Date),
        ("timestamp", Date),
        ("enum", Enum),
        ("constant", Enum),
        ("unknown", Unknown),
    ];

    let mut map = HashMap::new();
    for (name, kind) in entries {
        map.insert(name, kind);
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_kind_aliases() {
        assert_eq!("TEXT".parse::<ValueKind>(), Ok(ValueKind::String));
        assert_eq!("long".parse::<ValueKind>(), Ok(ValueKind::Integer));
        assert_eq!(" timestamp ".parse::<ValueKind>(), Ok(ValueKind::Date));
        assert!("geometry".parse::<ValueKind>().is_err());
    }

    #[test]
    fn test_deserialize_accepts_aliases() {
        let kinds: Vec<ValueKind> = serde_json::from_str(r#"["text", "double", "unknown"]"#).unwrap();
        assert_eq!(
            kinds,
            vec![ValueKind::String, ValueKind::Float, ValueKind::Unknown]
        );
        assert_eq!(serde_json::to_string(&ValueKind::Integer).unwrap(), r#""integer""#);
    }
}
