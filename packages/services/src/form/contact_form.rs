use super::field_store::FieldStore;
use super::submission::{FormState, SubmissionController, SubmitOutcome};
use super::view::ContactFormView;
use crate::history::{HistoryEntry, HistoryError, SubmissionHistory};
use crate::validation::{InputValidator, LiveValidation, ValidationResult};
use models::{Field, FormRecord, SubmittedRecord, UnknownFieldError};

/// A contact form session: values, live errors, the last commit and an
/// optional history that hears about every commit.
#[derive(Default)]
pub struct ContactForm {
    store: FieldStore,
    live: LiveValidation,
    controller: SubmissionController,
    history: Option<Box<dyn SubmissionHistory>>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a history, initializing it first
    pub fn with_history(mut self, mut history: Box<dyn SubmissionHistory>) -> Result<Self, HistoryError> {
        history.init()?;
        self.history = Some(history);
        Ok(self)
    }

    /// Setter keyed by field name, as raw input events arrive
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> Result<(), UnknownFieldError> {
        let field = name.parse::<Field>()?;
        self.update(field, value);
        Ok(())
    }

    pub fn update(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        self.controller.mark_editing();
        self.live.schedule(field, value.clone());
        self.store.set_field(field, value);
    }

    /// Wait for live validation of every change so far
    pub async fn settle(&mut self) -> &ValidationResult {
        self.live.settle().await
    }

    pub async fn submit(&mut self) -> SubmitOutcome {
        let outcome = self.controller.submit(&mut self.store).await;
        match &outcome {
            SubmitOutcome::Committed(record) => {
                self.live.clear();
                self.record_history(record);
            }
            SubmitOutcome::Rejected(errors) => self.live.replace_all(errors.clone()),
        }
        outcome
    }

    fn record_history(&mut self, record: &SubmittedRecord) {
        let Some(history) = self.history.as_mut() else {
            return;
        };
        if let Err(e) = history.append(HistoryEntry::new(record.clone())) {
            tracing::warn!(error = %e, "failed to append submission to history");
        }
    }

    pub fn errors(&self) -> &ValidationResult {
        self.live.displayed()
    }

    pub fn values(&self) -> &FormRecord {
        self.store.record()
    }

    /// Whether a submit right now would commit
    pub fn is_valid(&self) -> bool {
        self.store.record().is_valid()
    }

    pub fn submitted(&self) -> Option<&SubmittedRecord> {
        self.controller.last_submitted()
    }

    pub fn state(&self) -> FormState {
        self.controller.state()
    }

    pub fn view(&self) -> ContactFormView {
        ContactFormView::build(self.errors(), self.submitted())
    }

    /// Recorded submissions; empty when no history is attached
    pub fn history(&self) -> Result<Vec<HistoryEntry>, HistoryError> {
        match &self.history {
            Some(history) => history.entries(),
            None => Ok(Vec::new()),
        }
    }

    pub fn clear_history(&mut self) -> Result<(), HistoryError> {
        match self.history.as_mut() {
            Some(history) => history.clear(),
            None => Ok(()),
        }
    }
}
