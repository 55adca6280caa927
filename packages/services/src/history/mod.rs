//! Persistence collaborator that receives every committed submission.
//!
//! The form core never reaches for storage on its own; a history is handed
//! to it and driven through `init`, `append` and `clear`.

pub mod entry;
pub mod error;
pub mod json_file;
pub mod memory;

pub use entry::HistoryEntry;
pub use error::HistoryError;
pub use json_file::JsonFileHistory;
pub use memory::MemoryHistory;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
pub trait SubmissionHistory: Send {
    /// Prepare the backing store. Called once when the history is attached.
    fn init(&mut self) -> Result<(), HistoryError>;

    /// Record a committed submission
    fn append(&mut self, entry: HistoryEntry) -> Result<(), HistoryError>;

    /// Wipe every recorded submission
    fn clear(&mut self) -> Result<(), HistoryError>;

    fn entries(&self) -> Result<Vec<HistoryEntry>, HistoryError>;
}
