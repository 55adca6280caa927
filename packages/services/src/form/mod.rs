pub mod contact_form;
pub mod field_store;
pub mod submission;
pub mod view;

pub use contact_form::ContactForm;
pub use field_store::FieldStore;
pub use submission::{FormState, SubmissionController, SubmitOutcome};
pub use view::{ContactFormView, DisplayElement, ErrorDisplay, FieldDescriptor, HEADING, SUBMIT_LABEL};
