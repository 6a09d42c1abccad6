//! Entities as they are already stored, loaded into the preheat before validation.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Identifiable metadata object: anything addressable by uid, code, name or attribute value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataObject {
    pub uid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Attribute uid to value.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub attribute_values: HashMap<String, String>,
}

impl MetadataObject {
    pub fn with_uid(uid: &str) -> Self {
        MetadataObject {
            uid: uid.to_string(),
            ..Default::default()
        }
    }

    pub fn with_code(mut self, code: &str) -> Self {
        self.code = Some(code.to_string());
        self
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_attribute(mut self, attribute: &str, value: &str) -> Self {
        self.attribute_values
            .insert(attribute.to_string(), value.to_string());
        self
    }
}

pub type Program = MetadataObject;
pub type ProgramStage = MetadataObject;
pub type TrackedEntityType = MetadataObject;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackedEntityInstance {
    pub uid: String,
    pub tracked_entity_type: TrackedEntityType,
}

/// A stored enrollment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramInstance {
    pub uid: String,
    pub program: Program,
    pub entity_instance: TrackedEntityInstance,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedEvent {
    pub uid: String,
    pub program_instance: ProgramInstance,
    pub program_stage: ProgramStage,
}
