use crate::{
    domain::{TrackerDto, TrackerType},
    validation::code::ValidationCode,
};
use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ValidationError {
    pub code: ValidationCode,
    pub tracker_type: TrackerType,
    pub uid: String,
    pub args: Vec<String>,
    pub message: String,
}

/// Collects the errors raised while validating a bundle.
#[derive(Serialize, Debug, Clone, Default)]
pub struct Reporter {
    errors: Vec<ValidationError>,
}

impl Reporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_error<T: TrackerDto>(&mut self, dto: &T, code: ValidationCode, args: &[&str]) {
        let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
        self.errors.push(ValidationError {
            code,
            tracker_type: dto.tracker_type(),
            uid: dto.uid().to_string(),
            message: code.format(&args),
            args,
        });
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn has_error_for(&self, code: ValidationCode, uid: &str) -> bool {
        self.errors.iter().any(|e| e.code == code && e.uid == uid)
    }

    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }
}
