use models::Field;
use std::collections::BTreeMap;
use std::fmt;

/// Prefix the view puts in front of every field error
pub const ERROR_PREFIX: &str = "Error: ";

/// Why a field failed its rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Value is empty (or whitespace only, for fields that trim)
    RequiredField,
    /// Value has fewer characters than the minimum
    MinLength(usize),
    /// Value does not have the expected shape
    InvalidFormat,
}

/// The single error a field currently carries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub kind: ValidationErrorKind,
    pub message: &'static str,
}

impl FieldError {
    pub fn new(field: Field, kind: ValidationErrorKind, message: &'static str) -> Self {
        Self { field, kind, message }
    }

    /// Text shown next to the field, e.g. "Error: lastName is a required field"
    pub fn display_text(&self) -> String {
        format!("{}{}", ERROR_PREFIX, self.message)
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message)
    }
}

/// A mapping of failing fields to their error, at most one per field
///
/// Iterates in form order: firstName, lastName, email.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: BTreeMap<Field, FieldError>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error, replacing whatever the field carried before
    pub fn add_error(&mut self, error: FieldError) {
        self.errors.insert(error.field, error);
    }

    pub fn remove(&mut self, field: Field) -> Option<FieldError> {
        self.errors.remove(&field)
    }

    /// Set or clear a field's entry from a fresh outcome
    pub fn apply(&mut self, field: Field, outcome: Option<FieldError>) {
        match outcome {
            Some(error) => self.add_error(error),
            None => {
                self.remove(field);
            }
        }
    }

    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.values()
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.errors.keys().copied()
    }

    pub fn into_result(self) -> Result<(), ValidationResult> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// Get a comma-separated list of all error messages
    pub fn to_string_list(&self) -> String {
        self.iter()
            .map(|error| error.message)
            .collect::<Vec<&str>>()
            .join(", ")
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_list())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn required(field: Field) -> FieldError {
        FieldError::new(field, ValidationErrorKind::RequiredField, "required")
    }

    #[test]
    fn test_one_error_per_field() {
        let mut result = ValidationResult::new();
        result.add_error(required(Field::Email));
        result.add_error(FieldError::new(
            Field::Email,
            ValidationErrorKind::InvalidFormat,
            "bad shape",
        ));

        assert_eq!(result.len(), 1);
        assert_eq!(
            result.get(Field::Email).map(|e| e.kind),
            Some(ValidationErrorKind::InvalidFormat)
        );
    }

    #[test]
    fn test_iterates_in_form_order() {
        let mut result = ValidationResult::new();
        result.add_error(required(Field::Email));
        result.add_error(required(Field::FirstName));
        result.add_error(required(Field::LastName));

        let fields: Vec<Field> = result.fields().collect();
        assert_eq!(fields, vec![Field::FirstName, Field::LastName, Field::Email]);
    }

    #[test]
    fn test_apply_clears_on_success() {
        let mut result = ValidationResult::new();
        result.apply(Field::LastName, Some(required(Field::LastName)));
        assert!(result.contains(Field::LastName));

        result.apply(Field::LastName, None);
        assert!(result.is_empty());
        assert!(result.into_result().is_ok());
    }

    #[test]
    fn test_to_string_lists_messages_in_form_order() {
        let mut result = ValidationResult::new();
        result.add_error(FieldError::new(
            Field::Email,
            ValidationErrorKind::InvalidFormat,
            "bad shape",
        ));
        result.add_error(required(Field::FirstName));

        assert_eq!(result.to_string(), "required, bad shape");
    }

    #[test]
    fn test_display_text_has_prefix() {
        let error = required(Field::LastName);
        assert_eq!(error.display_text(), "Error: required");
        assert_eq!(error.to_string(), "required");
    }
}
