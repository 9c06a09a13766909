use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A review submission record written to the metadata store.
///
/// Serializable for JSON export to the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRecord {
    /// Identifier of the sentence/lexical entry the recording belongs to.
    pub sentence_id: String,
    /// Submission category (e.g., "casual_study").
    pub category: String,
    /// Durable location of the uploaded recording.
    pub recording_url: String,
    pub submitted_at: DateTime<Utc>,
}

impl SubmissionRecord {
    pub fn new(sentence_id: &str, category: &str, recording_url: &str) -> Self {
        Self {
            sentence_id: sentence_id.to_string(),
            category: category.to_string(),
            recording_url: recording_url.to_string(),
            submitted_at: Utc::now(),
        }
    }
}
