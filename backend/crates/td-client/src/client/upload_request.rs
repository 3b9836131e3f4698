use td_core::SubmissionRecord;

use serde::Serialize;

/// Body of `POST /api/upload-csv`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadRequest {
    pub csv_data: String,
    pub user_id: String,
    pub with_feedback: bool,
}

impl From<&SubmissionRecord> for UploadRequest {
    fn from(record: &SubmissionRecord) -> Self {
        Self {
            csv_data: record.to_csv(),
            user_id: record.uid.clone(),
            with_feedback: record.with_feedback,
        }
    }
}
