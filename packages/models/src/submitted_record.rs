use crate::field::Field;
use crate::form_record::FormRecord;
use serde::{Deserialize, Serialize};

/// A form committed by a valid submission
///
/// `message` is `None` when the form's message was left empty, so nothing is
/// displayed for it afterward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedRecord {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl SubmittedRecord {
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::FirstName => Some(&self.first_name),
            Field::LastName => Some(&self.last_name),
            Field::Email => Some(&self.email),
            Field::Message => self.message.as_deref(),
        }
    }
}

impl From<FormRecord> for SubmittedRecord {
    fn from(record: FormRecord) -> Self {
        let message = Some(record.message).filter(|m| !m.is_empty());
        SubmittedRecord {
            first_name: record.first_name,
            last_name: record.last_name,
            email: record.email,
            message,
        }
    }
}
