//! Entities as submitted for import.

use crate::persisted::MetadataObject;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrackerType {
    TrackedEntity,
    Enrollment,
    Event,
}

impl TrackerType {
    pub fn name(&self) -> &'static str {
        match self {
            TrackerType::TrackedEntity => "tracked entity",
            TrackerType::Enrollment => "enrollment",
            TrackerType::Event => "event",
        }
    }
}

impl fmt::Display for TrackerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Reference to a metadata object under one id scheme.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MetadataIdentifier {
    Uid(String),
    Code(String),
    Name(String),
    Attribute { attribute: String, value: String },
}

impl MetadataIdentifier {
    pub fn of_uid(uid: &str) -> Self {
        MetadataIdentifier::Uid(uid.to_string())
    }

    pub fn of_code(code: &str) -> Self {
        MetadataIdentifier::Code(code.to_string())
    }

    pub fn of_name(name: &str) -> Self {
        MetadataIdentifier::Name(name.to_string())
    }

    pub fn of_attribute(attribute: &str, value: &str) -> Self {
        MetadataIdentifier::Attribute {
            attribute: attribute.to_string(),
            value: value.to_string(),
        }
    }

    /// The raw identifier value, whatever the scheme.
    pub fn identifier(&self) -> &str {
        match self {
            MetadataIdentifier::Uid(v)
            | MetadataIdentifier::Code(v)
            | MetadataIdentifier::Name(v)
            | MetadataIdentifier::Attribute { value: v, .. } => v,
        }
    }

    /// True when `metadata` is the object this identifier refers to under its scheme.
    pub fn is_equal_to(&self, metadata: &MetadataObject) -> bool {
        match self {
            MetadataIdentifier::Uid(uid) => metadata.uid == *uid,
            MetadataIdentifier::Code(code) => metadata.code.as_deref() == Some(code.as_str()),
            MetadataIdentifier::Name(name) => metadata.name.as_deref() == Some(name.as_str()),
            MetadataIdentifier::Attribute { attribute, value } => {
                metadata.attribute_values.get(attribute) == Some(value)
            }
        }
    }
}

impl fmt::Display for MetadataIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataIdentifier::Attribute { attribute, value } => {
                write!(f, "{value} (attribute {attribute})")
            }
            other => f.write_str(other.identifier()),
        }
    }
}

/// An incoming tracker object, addressed by its uid.
pub trait TrackerDto {
    fn uid(&self) -> &str;
    fn tracker_type(&self) -> TrackerType;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackedEntity {
    pub tracked_entity: String,
    pub tracked_entity_type: MetadataIdentifier,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    pub enrollment: String,
    pub tracked_entity: String,
    pub program: MetadataIdentifier,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub event: String,
    pub enrollment: String,
    pub program_stage: MetadataIdentifier,
}

impl TrackerDto for TrackedEntity {
    fn uid(&self) -> &str {
        &self.tracked_entity
    }

    fn tracker_type(&self) -> TrackerType {
        TrackerType::TrackedEntity
    }
}

impl TrackerDto for Enrollment {
    fn uid(&self) -> &str {
        &self.enrollment
    }

    fn tracker_type(&self) -> TrackerType {
        TrackerType::Enrollment
    }
}

impl TrackerDto for Event {
    fn uid(&self) -> &str {
        &self.event
    }

    fn tracker_type(&self) -> TrackerType {
        TrackerType::Event
    }
}
