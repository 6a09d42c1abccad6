use crate::domain::TrackerType;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("Failed to parse tracker bundle: {0}")]
    Deserialize(#[from] serde_json::Error),

    #[error("Duplicate {tracker_type} `{uid}` in bundle")]
    DuplicateUid { tracker_type: TrackerType, uid: String },

    #[error("Empty identifier for `{0}`")]
    EmptyIdentifier(String),
}
