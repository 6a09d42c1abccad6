use model::error::SchemaError;
use planner::error::QueryError;
use thiserror::Error;
use tracker::error::TrackerError;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read input file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("Failed to parse JSON input: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Failed to serialize data to JSON: {0}")]
    JsonSerialize(serde_json::Error),

    #[error("Failed to load schemas: {0}")]
    Schema(#[from] SchemaError),

    #[error("Failed to plan query: {0}")]
    Query(#[from] QueryError),

    #[error("Failed to load tracker bundle: {0}")]
    Tracker(#[from] TrackerError),

    #[error("Row {0} is not a JSON object")]
    InvalidRow(usize),

    #[error("Tracker bundle has {0} validation error(s)")]
    ValidationFailed(usize),
}
