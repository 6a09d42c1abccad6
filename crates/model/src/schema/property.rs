use crate::core::kind::ValueKind;
use serde::{Deserialize, Serialize};

/// Schema metadata for a single attribute of a persisted entity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Property {
    pub name: String,

    /// Storage column backing the attribute. Defaults to `name`.
    #[serde(default)]
    pub field_name: String,

    /// Declared kind of the attribute (for collections, of the container).
    pub kind: ValueKind,

    #[serde(default)]
    pub collection: bool,

    /// Element kind of a collection-typed attribute.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_kind: Option<ValueKind>,

    /// Name of the schema a reference attribute points to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

impl Property {
    pub fn new(name: &str, kind: ValueKind) -> Self {
        Property {
            name: name.to_string(),
            field_name: name.to_string(),
            kind,
            collection: false,
            item_kind: None,
            reference: None,
        }
    }

    pub fn collection_of(name: &str, item_kind: ValueKind) -> Self {
        Property {
            collection: true,
            item_kind: Some(item_kind),
            ..Property::new(name, ValueKind::Unknown)
        }
    }

    pub fn reference_to(name: &str, schema: &str) -> Self {
        Property {
            reference: Some(schema.to_string()),
            ..Property::new(name, ValueKind::String)
        }
    }

    pub fn with_field_name(mut self, field_name: &str) -> Self {
        self.field_name = field_name.to_string();
        self
    }

    pub fn is_collection(&self) -> bool {
        self.collection
    }

    pub fn field_name(&self) -> &str {
        if self.field_name.is_empty() {
            &self.name
        } else {
            &self.field_name
        }
    }

    /// Kind that filter arguments are coerced into: the element kind for collections,
    /// the declared kind otherwise.
    pub fn argument_kind(&self) -> ValueKind {
        if self.collection {
            self.item_kind.unwrap_or(ValueKind::Unknown)
        } else {
            self.kind
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argument_kind_uses_element_kind_for_collections() {
        let tags = Property::collection_of("tags", ValueKind::String);
        assert_eq!(tags.argument_kind(), ValueKind::String);

        let age = Property::new("age", ValueKind::Integer);
        assert_eq!(age.argument_kind(), ValueKind::Integer);
    }

    #[test]
    fn test_field_name_defaults_to_name() {
        let json = r#"{ "name": "created", "kind": "date" }"#;
        let p: Property = serde_json::from_str(json).unwrap();
        assert_eq!(p.field_name(), "created");
        assert!(!p.is_collection());

        let p = p.with_field_name("created_at");
        assert_eq!(p.field_name(), "created_at");
    }
}
