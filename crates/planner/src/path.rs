use model::{error::SchemaError, schema::property::Property, schema::registry::SchemaRegistry};

/// Describes how to reach a filtered attribute: its dotted path, its schema
/// metadata and the join aliases crossed on the way.
///
/// Each alias is derived from the path prefix it joins (`parent`, `parent_parent`),
/// so the same reference reached at different depths gets distinct aliases.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryPath {
    pub path: String,
    pub property: Property,
    pub alias: Vec<String>,
}

impl QueryPath {
    pub fn new(path: &str, property: Property) -> Self {
        QueryPath {
            path: path.to_string(),
            property,
            alias: Vec::new(),
        }
    }

    pub fn with_alias(mut self, alias: &str) -> Self {
        self.alias.push(alias.to_string());
        self
    }

    pub fn have_alias(&self) -> bool {
        !self.alias.is_empty()
    }

    /// Pairs every crossed reference property with the alias its join uses.
    pub fn crossed(&self) -> impl Iterator<Item = (&str, &str)> {
        self.path
            .split('.')
            .zip(self.alias.iter().map(String::as_str))
    }

    /// Column addressed when the predicate is built against the root table.
    /// Direct properties map to their field name; anything else keeps the raw path.
    pub fn root_column(&self) -> &str {
        if self.path == self.property.name {
            self.property.field_name()
        } else {
            &self.path
        }
    }

    /// Walks a dotted path from `root_schema`; every crossed reference property
    /// contributes a join alias named after the path up to and including it.
    pub fn resolve(
        registry: &SchemaRegistry,
        root_schema: &str,
        path: &str,
    ) -> Result<QueryPath, SchemaError> {
        let segments: Vec<&str> = path.split('.').collect();
        let (last, crossed) = segments
            .split_last()
            .ok_or_else(|| SchemaError::UnknownProperty {
                schema: root_schema.to_string(),
                property: path.to_string(),
            })?;

        let mut schema = root_schema.to_string();
        let mut alias = Vec::with_capacity(crossed.len());

        for (depth, segment) in crossed.iter().enumerate() {
            let property = registry.property(&schema, segment)?;
            let Some(target) = &property.reference else {
                return Err(SchemaError::NotAReference {
                    schema,
                    property: segment.to_string(),
                });
            };
            alias.push(crossed[..=depth].join("_"));
            schema = target.clone();
        }

        let property = registry.property(&schema, last)?.clone();

        Ok(QueryPath {
            path: path.to_string(),
            property,
            alias,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::{core::kind::ValueKind, schema::registry::Schema};

    fn registry() -> SchemaRegistry {
        vec![
            Schema::new("enrollment", "enrollment")
                .property(Property::new("status", ValueKind::Enum))
                .property(Property::reference_to("program", "program").with_field_name("programid")),
            Schema::new("program", "program")
                .property(Property::new("code", ValueKind::String))
                .property(Property::new("version", ValueKind::Integer)),
            Schema::new("orgUnit", "organisationunit")
                .property(Property::new("code", ValueKind::String))
                .property(Property::reference_to("parent", "orgUnit").with_field_name("parentid")),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_resolve_direct_property() {
        let path = QueryPath::resolve(&registry(), "enrollment", "status").unwrap();

        assert!(!path.have_alias());
        assert_eq!(path.property.kind, ValueKind::Enum);
        assert_eq!(path.root_column(), "status");
    }

    #[test]
    fn test_resolve_through_reference() {
        let path = QueryPath::resolve(&registry(), "enrollment", "program.code").unwrap();

        assert_eq!(path.alias, vec!["program".to_string()]);
        assert_eq!(path.property.name, "code");
        assert_eq!(path.root_column(), "program.code");
    }

    #[test]
    fn test_resolve_self_reference_gets_alias_per_depth() {
        let path = QueryPath::resolve(&registry(), "orgUnit", "parent.parent.code").unwrap();

        assert_eq!(
            path.alias,
            vec!["parent".to_string(), "parent_parent".to_string()]
        );
        assert_eq!(
            path.crossed().collect::<Vec<_>>(),
            vec![("parent", "parent"), ("parent", "parent_parent")]
        );
    }

    #[test]
    fn test_resolve_errors() {
        assert!(matches!(
            QueryPath::resolve(&registry(), "enrollment", "status.code"),
            Err(SchemaError::NotAReference { .. })
        ));
        assert!(matches!(
            QueryPath::resolve(&registry(), "enrollment", "program.name"),
            Err(SchemaError::UnknownProperty { .. })
        ));
        assert!(matches!(
            QueryPath::resolve(&registry(), "event", "status"),
            Err(SchemaError::UnknownSchema(_))
        ));
    }
}
