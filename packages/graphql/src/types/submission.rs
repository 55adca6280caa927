use async_graphql::SimpleObject;
use chrono::{DateTime, Utc};
use models::SubmittedRecord;
use services::HistoryEntry;
use uuid::Uuid;

#[derive(SimpleObject)]
pub struct SubmittedRecordType {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: Option<String>,
}

impl From<SubmittedRecord> for SubmittedRecordType {
    fn from(r: SubmittedRecord) -> Self {
        SubmittedRecordType {
            first_name: r.first_name,
            last_name: r.last_name,
            email: r.email,
            message: r.message,
        }
    }
}

#[derive(SimpleObject)]
pub struct HistoryEntryType {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub record: SubmittedRecordType,
}

impl From<HistoryEntry> for HistoryEntryType {
    fn from(e: HistoryEntry) -> Self {
        HistoryEntryType {
            id: e.id,
            submitted_at: e.submitted_at,
            record: e.record.into(),
        }
    }
}
