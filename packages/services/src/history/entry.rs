use chrono::{DateTime, Utc};
use models::SubmittedRecord;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One committed submission as kept by the history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub record: SubmittedRecord,
}

impl HistoryEntry {
    pub fn new(record: SubmittedRecord) -> Self {
        Self {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            record,
        }
    }
}
