pub mod field_validators;
pub mod input_validator;
pub mod live;
pub mod validation_result;

// Re-export common types and functions
pub use field_validators::{validate, validate_async, validate_field, validate_field_async, FieldValidator};
pub use input_validator::InputValidator;
pub use live::{LiveValidation, PendingValidation};
pub use validation_result::{FieldError, ValidationErrorKind, ValidationResult, ERROR_PREFIX};
