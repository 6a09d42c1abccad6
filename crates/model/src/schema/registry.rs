use crate::{error::SchemaError, schema::property::Property};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Schema of one persisted entity: its table and its properties.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Schema {
    pub name: String,
    pub table: String,
    #[serde(default = "default_primary_key")]
    pub primary_key: String,
    pub properties: Vec<Property>,
}

fn default_primary_key() -> String {
    "id".to_string()
}

impl Schema {
    pub fn new(name: &str, table: &str) -> Self {
        Schema {
            name: name.to_string(),
            table: table.to_string(),
            primary_key: default_primary_key(),
            properties: Vec::new(),
        }
    }

    pub fn with_primary_key(mut self, primary_key: &str) -> Self {
        self.primary_key = primary_key.to_string();
        self
    }

    pub fn property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.name == name)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    schemas: HashMap<String, Schema>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        let schemas: Vec<Schema> = serde_json::from_str(json)?;
        Ok(schemas.into_iter().collect())
    }

    pub fn register(&mut self, schema: Schema) {
        self.schemas.insert(schema.name.clone(), schema);
    }

    pub fn get(&self, name: &str) -> Result<&Schema, SchemaError> {
        self.schemas
            .get(name)
            .ok_or_else(|| SchemaError::UnknownSchema(name.to_string()))
    }

    pub fn property(&self, schema: &str, property: &str) -> Result<&Property, SchemaError> {
        self.get(schema)?
            .get(property)
            .ok_or_else(|| SchemaError::UnknownProperty {
                schema: schema.to_string(),
                property: property.to_string(),
            })
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}

impl FromIterator<Schema> for SchemaRegistry {
    fn from_iter<I: IntoIterator<Item = Schema>>(iter: I) -> Self {
        let mut registry = SchemaRegistry::new();
        for schema in iter {
            registry.register(schema);
        }
        registry
    }
}
