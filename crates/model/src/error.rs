use crate::core::kind::ValueKind;
use thiserror::Error;

/// Raised when a value cannot be converted to a requested kind.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoercionError {
    #[error("Cannot coerce `{value}` to {kind}")]
    Incompatible { value: String, kind: ValueKind },

    #[error("Cannot coerce into {0}: the kind has no comparison semantics")]
    UnsupportedKind(ValueKind),

    #[error("Cannot coerce a null value to {0}")]
    Null(ValueKind),
}

/// Errors raised while loading schema definitions.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Unknown schema: {0}")]
    UnknownSchema(String),

    #[error("Unknown property `{property}` on schema `{schema}`")]
    UnknownProperty { schema: String, property: String },

    #[error("Property `{property}` on schema `{schema}` is not a reference")]
    NotAReference { schema: String, property: String },

    #[error("Failed to deserialize schema definitions: {0}")]
    Deserialize(#[from] serde_json::Error),
}
