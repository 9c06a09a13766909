use async_trait::async_trait;

use crate::models::entry::{Entry, EntryDraft};
use crate::models::error::RecorderError;
use crate::models::submission::SubmissionRecord;

/// Interface for the remote document database.
///
/// Holds the lexical entry collection and the review submission
/// collection. All faults surface as `MetadataWrite`.
#[async_trait]
pub trait MetadataStore: Send + Sync {
    /// Create a new lexical entry, returning its identifier.
    async fn create_entry(&self, draft: &EntryDraft) -> Result<String, RecorderError>;

    /// Overwrite the fields of an existing entry.
    async fn update_entry(&self, id: &str, draft: &EntryDraft) -> Result<(), RecorderError>;

    async fn entry(&self, id: &str) -> Result<Option<Entry>, RecorderError>;

    /// Append a review submission record.
    async fn add_submission(&self, record: &SubmissionRecord) -> Result<(), RecorderError>;

    /// Submissions attached to one sentence, for the grading screen.
    async fn submissions_for(&self, sentence_id: &str)
        -> Result<Vec<SubmissionRecord>, RecorderError>;
}
