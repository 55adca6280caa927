use crate::validation::ValidationResult;
use models::{Field, SubmittedRecord};

pub const HEADING: &str = "Contact Form";
pub const SUBMIT_LABEL: &str = "Submit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub field: Field,
    pub placeholder: Option<&'static str>,
}

/// An error as rendered next to its field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorDisplay {
    pub field: Field,
    pub message: &'static str,
    pub text: String,
}

/// One value of the last commit, addressable by its field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayElement {
    pub field: Field,
    pub value: String,
}

/// Everything a rendering layer reads to draw the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactFormView {
    pub heading: &'static str,
    pub submit_label: &'static str,
    pub fields: Vec<FieldDescriptor>,
    pub errors: Vec<ErrorDisplay>,
    pub submitted: Vec<DisplayElement>,
}

impl ContactFormView {
    pub fn build(errors: &ValidationResult, submitted: Option<&SubmittedRecord>) -> Self {
        let fields: Vec<FieldDescriptor> = Field::ALL
            .into_iter()
            .map(|field| FieldDescriptor {
                field,
                placeholder: field.placeholder(),
            })
            .collect();

        let errors: Vec<ErrorDisplay> = errors
            .iter()
            .map(|error| ErrorDisplay {
                field: error.field,
                message: error.message,
                text: error.display_text(),
            })
            .collect();

        // No element at all for a message that was left empty
        let submitted: Vec<DisplayElement> = submitted
            .map(|record| {
                Field::ALL
                    .into_iter()
                    .filter_map(|field| {
                        record.get(field).map(|value| DisplayElement {
                            field,
                            value: value.to_string(),
                        })
                    })
                    .collect()
            })
            .unwrap_or_default();

        ContactFormView {
            heading: HEADING,
            submit_label: SUBMIT_LABEL,
            fields,
            errors,
            submitted,
        }
    }

    pub fn error_for(&self, field: Field) -> Option<&ErrorDisplay> {
        self.errors.iter().find(|e| e.field == field)
    }

    pub fn submitted_element(&self, field: Field) -> Option<&DisplayElement> {
        self.submitted.iter().find(|e| e.field == field)
    }
}
