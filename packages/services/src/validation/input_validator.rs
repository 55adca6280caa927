use super::field_validators::validate;
use super::validation_result::ValidationResult;
use models::FormRecord;

pub trait InputValidator {
    fn validate(&self) -> Result<(), ValidationResult>;

    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

impl InputValidator for FormRecord {
    fn validate(&self) -> Result<(), ValidationResult> {
        validate(self).into_result()
    }
}
