use super::field_store::FieldStore;
use crate::validation::{validate_async, ValidationResult};
use models::SubmittedRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormState {
    #[default]
    Editing,
    Submitted,
}

/// What a submit attempt did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every field passed; the record was committed and the form cleared
    Committed(SubmittedRecord),
    /// At least one field failed; nothing was committed
    Rejected(ValidationResult),
}

impl SubmitOutcome {
    pub fn is_committed(&self) -> bool {
        matches!(self, SubmitOutcome::Committed(_))
    }
}

/// Gates submission on a fresh validation snapshot and owns the last commit
#[derive(Debug, Default)]
pub struct SubmissionController {
    state: FormState,
    last_submitted: Option<SubmittedRecord>,
}

impl SubmissionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the whole form. On success commit it and reset the store;
    /// on failure leave the store untouched.
    pub async fn submit(&mut self, store: &mut FieldStore) -> SubmitOutcome {
        if let Err(errors) = validate_async(store.record()).await {
            tracing::debug!(failing = %errors, "submission rejected");
            return SubmitOutcome::Rejected(errors);
        }

        let record = SubmittedRecord::from(store.record().clone());
        store.reset();
        self.last_submitted = Some(record.clone());
        self.state = FormState::Submitted;
        tracing::info!(
            email = %record.email,
            has_message = record.message.is_some(),
            "submission committed"
        );
        SubmitOutcome::Committed(record)
    }

    /// Any edit after a commit puts the form back into editing; the last
    /// commit stays on display.
    pub fn mark_editing(&mut self) {
        self.state = FormState::Editing;
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn last_submitted(&self) -> Option<&SubmittedRecord> {
        self.last_submitted.as_ref()
    }
}
