use super::field_validators::validate_field_async;
use super::validation_result::{FieldError, ValidationResult};
use models::Field;
use std::collections::{HashMap, VecDeque};

/// A validation task queued by a value change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingValidation {
    pub field: Field,
    pub value: String,
    pub generation: u64,
}

/// Per-keystroke validation as a cooperative queue.
///
/// Each change is stamped with a per-field generation. A result is applied
/// only while its generation is still the newest for that field, so a stale
/// task resolving late never overwrites a fresher error.
#[derive(Debug, Default)]
pub struct LiveValidation {
    latest: HashMap<Field, u64>,
    queue: VecDeque<PendingValidation>,
    displayed: ValidationResult,
}

impl LiveValidation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a validation for a field's new value. Returns the task's
    /// generation, or `None` for fields without a rule.
    pub fn schedule(&mut self, field: Field, value: impl Into<String>) -> Option<u64> {
        if !field.is_validated() {
            return None;
        }

        let generation = self.bump(field);
        tracing::debug!(field = %field, generation, "validation scheduled");
        self.queue.push_back(PendingValidation {
            field,
            value: value.into(),
            generation,
        });
        Some(generation)
    }

    /// Hand the oldest queued task to an external driver
    pub fn take_next(&mut self) -> Option<PendingValidation> {
        self.queue.pop_front()
    }

    pub fn is_current(&self, task: &PendingValidation) -> bool {
        self.latest.get(&task.field) == Some(&task.generation)
    }

    /// Apply a resolved task. Returns false when the task was superseded.
    pub fn apply(&mut self, task: &PendingValidation, outcome: Option<FieldError>) -> bool {
        self.apply_outcome(task.field, task.generation, outcome)
    }

    fn apply_outcome(&mut self, field: Field, generation: u64, outcome: Option<FieldError>) -> bool {
        if self.latest.get(&field) != Some(&generation) {
            tracing::debug!(field = %field, generation, "stale validation result dropped");
            return false;
        }
        self.displayed.apply(field, outcome);
        true
    }

    /// Resolve every queued task and return the refreshed error set
    pub async fn settle(&mut self) -> &ValidationResult {
        while let Some(task) = self.take_next() {
            if !self.is_current(&task) {
                continue;
            }
            let PendingValidation {
                field,
                value,
                generation,
            } = task;
            let outcome = validate_field_async(field, value).await;
            self.apply_outcome(field, generation, outcome);
        }
        &self.displayed
    }

    /// Install a full snapshot, superseding everything still queued
    pub fn replace_all(&mut self, snapshot: ValidationResult) {
        for field in Field::VALIDATED {
            self.bump(field);
        }
        self.queue.clear();
        self.displayed = snapshot;
    }

    pub fn clear(&mut self) {
        self.replace_all(ValidationResult::new());
    }

    pub fn displayed(&self) -> &ValidationResult {
        &self.displayed
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn is_settled(&self) -> bool {
        self.queue.is_empty()
    }

    fn bump(&mut self, field: Field) -> u64 {
        let generation = self.latest.entry(field).or_insert(0);
        *generation += 1;
        *generation
    }
}
