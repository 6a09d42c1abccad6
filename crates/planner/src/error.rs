use model::error::{CoercionError, SchemaError};
use thiserror::Error;

/// Errors raised while planning or translating query filters.
#[derive(Debug, Error)]
pub enum QueryError {
    /// A filter argument could not be converted to the attribute's kind.
    #[error("Failed to coerce filter argument: {0}")]
    Coercion(#[from] CoercionError),

    /// A filter path does not resolve against the schemas.
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    #[error("Operator `{0}` has no argument")]
    MissingArgument(String),

    #[error("Operator `{0}` has an empty argument list")]
    EmptyArgument(String),

    #[error("Unknown operator: {0}")]
    UnknownOperator(String),

    #[error("Invalid filter `{0}`: expected `path:operator:value`")]
    InvalidFilter(String),
}
