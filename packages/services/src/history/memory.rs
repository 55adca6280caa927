use super::{HistoryEntry, HistoryError, SubmissionHistory};

/// History that lives as long as the session
#[derive(Debug, Default)]
pub struct MemoryHistory {
    entries: Vec<HistoryEntry>,
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SubmissionHistory for MemoryHistory {
    fn init(&mut self) -> Result<(), HistoryError> {
        Ok(())
    }

    fn append(&mut self, entry: HistoryEntry) -> Result<(), HistoryError> {
        self.entries.push(entry);
        Ok(())
    }

    fn clear(&mut self) -> Result<(), HistoryError> {
        self.entries.clear();
        Ok(())
    }

    fn entries(&self) -> Result<Vec<HistoryEntry>, HistoryError> {
        Ok(self.entries.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::submitted_record;

    #[test]
    fn test_append_and_clear() {
        let mut history = MemoryHistory::new();
        history.init().unwrap();
        assert!(history.entries().unwrap().is_empty());

        history.append(HistoryEntry::new(submitted_record(None))).unwrap();
        history.append(HistoryEntry::new(submitted_record(Some("hi")))).unwrap();

        let entries = history.entries().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].record.message.as_deref(), Some("hi"));
        assert_ne!(entries[0].id, entries[1].id);

        history.clear().unwrap();
        assert!(history.entries().unwrap().is_empty());
    }
}
