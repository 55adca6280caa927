use crate::form::{ContactForm, ContactFormView};
use models::SubmittedRecord;

pub fn filled_form(first_name: &str, last_name: &str, email: &str, message: &str) -> ContactForm {
    let mut form = ContactForm::new();
    form.set_field("firstName", first_name).unwrap();
    form.set_field("lastName", last_name).unwrap();
    form.set_field("email", email).unwrap();
    form.set_field("message", message).unwrap();
    form
}

/// The record committed by the canonical valid submission
pub fn submitted_record(message: Option<&str>) -> SubmittedRecord {
    SubmittedRecord {
        first_name: "abcde".to_string(),
        last_name: "abc".to_string(),
        email: "aaa123@email.com".to_string(),
        message: message.map(str::to_string),
    }
}

/// Whether any rendered text contains `needle`, the way a test harness
/// looks for text on screen
pub fn view_contains_text(view: &ContactFormView, needle: &str) -> bool {
    view.heading.contains(needle)
        || view.errors.iter().any(|e| e.text.contains(needle))
        || view.submitted.iter().any(|e| e.value.contains(needle))
}
