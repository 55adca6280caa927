use super::{HistoryEntry, HistoryError, SubmissionHistory};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// History kept as a JSON array in a single file
#[derive(Debug, Clone)]
pub struct JsonFileHistory {
    path: PathBuf,
}

impl JsonFileHistory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn write(&self, entries: &[HistoryEntry]) -> Result<(), HistoryError> {
        let json = serde_json::to_vec_pretty(entries)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl SubmissionHistory for JsonFileHistory {
    fn init(&mut self) -> Result<(), HistoryError> {
        if self.path.exists() {
            // Surface a corrupt file now rather than on the first commit
            self.entries()?;
            return Ok(());
        }
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        tracing::info!(path = %self.path.display(), "creating submission history");
        self.write(&[])
    }

    fn append(&mut self, entry: HistoryEntry) -> Result<(), HistoryError> {
        let mut entries = self.entries()?;
        entries.push(entry);
        self.write(&entries)
    }

    fn clear(&mut self) -> Result<(), HistoryError> {
        self.write(&[])
    }

    fn entries(&self) -> Result<Vec<HistoryEntry>, HistoryError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_slice(&bytes)?)
    }
}
