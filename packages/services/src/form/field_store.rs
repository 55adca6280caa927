use models::{Field, FormRecord};

/// Live values of the four inputs. Holds raw input only, never errors.
#[derive(Debug, Clone, Default)]
pub struct FieldStore {
    record: FormRecord,
}

impl FieldStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.record.set(field, value);
    }

    pub fn get(&self, field: Field) -> &str {
        self.record.get(field)
    }

    pub fn record(&self) -> &FormRecord {
        &self.record
    }

    pub fn reset(&mut self) {
        self.record = FormRecord::default();
    }
}
