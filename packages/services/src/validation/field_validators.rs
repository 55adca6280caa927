use super::input_validator::InputValidator;
use super::validation_result::{FieldError, ValidationErrorKind, ValidationResult};
use models::{Field, FormRecord};
use regex::Regex;
use std::sync::LazyLock;

pub const FIRST_NAME_MIN_LENGTH: usize = 5;

pub const FIRST_NAME_MESSAGE: &str = "firstName must have at least 5 characters";
pub const LAST_NAME_MESSAGE: &str = "lastName is a required field";
pub const EMAIL_MESSAGE: &str = "email must be a valid email address";

/// local@domain with at least one dot in the domain and no whitespace anywhere
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)+$").expect("Invalid email regex")
});

pub struct FieldValidator;

impl FieldValidator {
    /// Literal character count, no trimming
    pub fn check_first_name(value: &str) -> Option<FieldError> {
        let kind = if value.is_empty() {
            ValidationErrorKind::RequiredField
        } else if value.chars().count() < FIRST_NAME_MIN_LENGTH {
            ValidationErrorKind::MinLength(FIRST_NAME_MIN_LENGTH)
        } else {
            return None;
        };
        Some(FieldError::new(Field::FirstName, kind, FIRST_NAME_MESSAGE))
    }

    pub fn check_last_name(value: &str) -> Option<FieldError> {
        if value.trim().is_empty() {
            return Some(FieldError::new(
                Field::LastName,
                ValidationErrorKind::RequiredField,
                LAST_NAME_MESSAGE,
            ));
        }
        None
    }

    pub fn check_email(value: &str) -> Option<FieldError> {
        if value.trim().is_empty() {
            return Some(FieldError::new(
                Field::Email,
                ValidationErrorKind::RequiredField,
                EMAIL_MESSAGE,
            ));
        }

        if !EMAIL_REGEX.is_match(value) {
            return Some(FieldError::new(
                Field::Email,
                ValidationErrorKind::InvalidFormat,
                EMAIL_MESSAGE,
            ));
        }
        None
    }

    pub fn check(field: Field, value: &str) -> Option<FieldError> {
        match field {
            Field::FirstName => Self::check_first_name(value),
            Field::LastName => Self::check_last_name(value),
            Field::Email => Self::check_email(value),
            Field::Message => None,
        }
    }

    pub fn validate_first_name(value: &str, errors: &mut ValidationResult) {
        errors.apply(Field::FirstName, Self::check_first_name(value));
    }

    pub fn validate_last_name(value: &str, errors: &mut ValidationResult) {
        errors.apply(Field::LastName, Self::check_last_name(value));
    }

    pub fn validate_email(value: &str, errors: &mut ValidationResult) {
        errors.apply(Field::Email, Self::check_email(value));
    }
}

/// Validate one field of a record
pub fn validate_field(field: Field, record: &FormRecord) -> Option<FieldError> {
    FieldValidator::check(field, record.get(field))
}

/// Validate every field of a record at once
pub fn validate(record: &FormRecord) -> ValidationResult {
    let mut errors = ValidationResult::new();

    FieldValidator::validate_first_name(&record.first_name, &mut errors);
    FieldValidator::validate_last_name(&record.last_name, &mut errors);
    FieldValidator::validate_email(&record.email, &mut errors);

    errors
}

/// Async entry point for live validation. Results may resolve after the
/// change that triggered them, so callers always await.
pub async fn validate_field_async(field: Field, value: String) -> Option<FieldError> {
    futures::future::lazy(move |_| FieldValidator::check(field, &value)).await
}

/// Async full-record snapshot, used at submit time
pub async fn validate_async(record: &FormRecord) -> Result<(), ValidationResult> {
    futures::future::lazy(|_| record.validate()).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_name_length_boundary() {
        for value in ["a", "ab", "abc", "abcd"] {
            let error = FieldValidator::check_first_name(value).expect("should fail");
            assert_eq!(error.kind, ValidationErrorKind::MinLength(5));
            assert_eq!(error.message, FIRST_NAME_MESSAGE);
        }

        // Exactly 5 characters is valid
        assert!(FieldValidator::check_first_name("abcde").is_none());
        assert!(FieldValidator::check_first_name("abcdefgh").is_none());
    }

    #[test]
    fn test_first_name_is_not_trimmed() {
        // Spaces count toward the length
        assert!(FieldValidator::check_first_name("  ab ").is_none());
        assert!(FieldValidator::check_first_name(" ab ").is_some());
    }

    #[test]
    fn test_first_name_counts_characters_not_bytes() {
        // 4 characters, 8 bytes
        assert!(FieldValidator::check_first_name("éééé").is_some());
        assert!(FieldValidator::check_first_name("ééééé").is_none());
    }

    #[test]
    fn test_empty_first_name_is_required() {
        let error = FieldValidator::check_first_name("").unwrap();
        assert_eq!(error.kind, ValidationErrorKind::RequiredField);
        assert_eq!(error.display_text(), "Error: firstName must have at least 5 characters");
    }

    #[test]
    fn test_last_name_required() {
        for value in ["", " ", "\t  \n"] {
            let error = FieldValidator::check_last_name(value).expect("should fail");
            assert_eq!(error.kind, ValidationErrorKind::RequiredField);
            assert_eq!(error.message, LAST_NAME_MESSAGE);
        }

        assert!(FieldValidator::check_last_name("a").is_none());
        assert!(FieldValidator::check_last_name("abc").is_none());
    }

    #[test]
    fn test_email_shapes() {
        for valid in ["aaa123@email.com", "first.last@sub.example.org", "a+b@x.io"] {
            assert!(FieldValidator::check_email(valid).is_none(), "{valid} should be valid");
        }

        for invalid in [
            "aaa",
            "aaa@",
            "@email.com",
            "aaa@email",
            "aaa@email.",
            "aaa@.com",
            "a a@email.com",
            "aaa@em ail.com",
            " aaa@email.com",
            "aaa@@email.com",
        ] {
            let error = FieldValidator::check_email(invalid).expect("should fail");
            assert_eq!(error.kind, ValidationErrorKind::InvalidFormat, "{invalid}");
            assert_eq!(error.message, EMAIL_MESSAGE);
        }
    }

    #[test]
    fn test_empty_email_is_required() {
        let error = FieldValidator::check_email("   ").unwrap();
        assert_eq!(error.kind, ValidationErrorKind::RequiredField);
        assert_eq!(error.message, EMAIL_MESSAGE);
    }

    #[test]
    fn test_message_is_never_validated() {
        assert!(FieldValidator::check(Field::Message, "").is_none());
        assert!(FieldValidator::check(Field::Message, "anything at all").is_none());
    }

    #[test]
    fn test_empty_record_fails_all_three_fields() {
        let errors = validate(&FormRecord::default());
        assert_eq!(errors.len(), 3);
        let fields: Vec<Field> = errors.fields().collect();
        assert_eq!(fields, vec![Field::FirstName, Field::LastName, Field::Email]);
        assert!(!errors.contains(Field::Message));
    }

    #[test]
    fn test_valid_names_without_email_fail_only_email() {
        let record = FormRecord {
            first_name: "abcde".to_string(),
            last_name: "abc".to_string(),
            ..Default::default()
        };
        let errors = validate(&record);
        assert_eq!(errors.len(), 1);
        assert!(errors.contains(Field::Email));
    }

    #[test]
    fn test_validate_field_reads_from_record() {
        let record = FormRecord {
            first_name: "a".to_string(),
            ..Default::default()
        };
        assert!(validate_field(Field::FirstName, &record).is_some());
        assert!(validate_field(Field::Message, &record).is_none());
    }

    #[tokio::test]
    async fn test_async_entry_points_match_sync() {
        let outcome = validate_field_async(Field::Email, "aaa".to_string()).await;
        assert_eq!(outcome, FieldValidator::check_email("aaa"));

        let record = FormRecord::default();
        assert_eq!(validate_async(&record).await, Err(validate(&record)));

        let valid = FormRecord {
            first_name: "abcde".to_string(),
            last_name: "abc".to_string(),
            email: "aaa123@email.com".to_string(),
            message: String::new(),
        };
        assert_eq!(validate_async(&valid).await, Ok(()));
    }
}
