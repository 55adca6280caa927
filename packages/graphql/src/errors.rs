use async_graphql::SimpleObject;
use services::{HistoryError, ValidationResult};
use std::fmt;

use crate::types::form::FieldErrorType;

#[derive(SimpleObject, Debug)]
pub struct ValidationErrorType {
    /// Every failing field's message, comma separated
    pub summary: String,
    pub errors: Vec<FieldErrorType>,
}

impl From<&ValidationResult> for ValidationErrorType {
    fn from(errors: &ValidationResult) -> Self {
        ValidationErrorType {
            summary: errors.to_string_list(),
            errors: errors.iter().map(FieldErrorType::from).collect(),
        }
    }
}

#[derive(SimpleObject, Debug)]
pub struct HistoryErr {
    pub message: String,
}

impl From<HistoryError> for HistoryErr {
    fn from(e: HistoryError) -> Self {
        HistoryErr { message: e.to_string() }
    }
}

impl fmt::Display for HistoryErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message.as_str())
    }
}
