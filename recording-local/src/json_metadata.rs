use std::path::PathBuf;

use async_trait::async_trait;
use tokio::sync::Mutex;

use recording_core::models::entry::{Entry, EntryDraft};
use recording_core::models::error::RecorderError;
use recording_core::models::submission::SubmissionRecord;
use recording_core::traits::metadata_store::MetadataStore;

const ENTRIES_FILE: &str = "entries.json";
const SUBMISSIONS_FILE: &str = "submissions.json";

/// Entry and submission collections as JSON documents under a root
/// directory.
///
/// Writes are read-modify-write over the whole document; the async
/// mutex serializes writers because the cycle spans awaits.
pub struct JsonMetadataStore {
    root: PathBuf,
    write_guard: Mutex<()>,
}

impl JsonMetadataStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            write_guard: Mutex::new(()),
        }
    }

    async fn read_collection<T: serde::de::DeserializeOwned>(
        &self,
        file: &str,
    ) -> Result<Vec<T>, RecorderError> {
        let path = self.root.join(file);
        let json = match tokio::fs::read_to_string(&path).await {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(RecorderError::MetadataWrite(format!(
                    "failed to read {file}: {e}"
                )))
            }
        };
        serde_json::from_str(&json)
            .map_err(|e| RecorderError::MetadataWrite(format!("failed to parse {file}: {e}")))
    }

    async fn write_collection<T: serde::Serialize>(
        &self,
        file: &str,
        collection: &[T],
    ) -> Result<(), RecorderError> {
        let json = serde_json::to_string_pretty(collection)
            .map_err(|e| RecorderError::MetadataWrite(format!("failed to serialize {file}: {e}")))?;

        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| RecorderError::MetadataWrite(format!("failed to create root: {e}")))?;
        tokio::fs::write(self.root.join(file), json)
            .await
            .map_err(|e| RecorderError::MetadataWrite(format!("failed to write {file}: {e}")))
    }
}

#[async_trait]
impl MetadataStore for JsonMetadataStore {
    async fn create_entry(&self, draft: &EntryDraft) -> Result<String, RecorderError> {
        let _guard = self.write_guard.lock().await;

        let mut entries: Vec<Entry> = self.read_collection(ENTRIES_FILE).await?;
        let id = uuid::Uuid::new_v4().to_string();
        entries.push(Entry {
            id: id.clone(),
            fields: draft.clone(),
        });
        self.write_collection(ENTRIES_FILE, &entries).await?;
        Ok(id)
    }

    async fn update_entry(&self, id: &str, draft: &EntryDraft) -> Result<(), RecorderError> {
        let _guard = self.write_guard.lock().await;

        let mut entries: Vec<Entry> = self.read_collection(ENTRIES_FILE).await?;
        let entry = entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| RecorderError::MetadataWrite(format!("unknown entry {id}")))?;
        entry.fields = draft.clone();
        self.write_collection(ENTRIES_FILE, &entries).await
    }

    async fn entry(&self, id: &str) -> Result<Option<Entry>, RecorderError> {
        let entries: Vec<Entry> = self.read_collection(ENTRIES_FILE).await?;
        Ok(entries.into_iter().find(|e| e.id == id))
    }

    async fn add_submission(&self, record: &SubmissionRecord) -> Result<(), RecorderError> {
        let _guard = self.write_guard.lock().await;

        let mut submissions: Vec<SubmissionRecord> =
            self.read_collection(SUBMISSIONS_FILE).await?;
        submissions.push(record.clone());
        self.write_collection(SUBMISSIONS_FILE, &submissions).await
    }

    async fn submissions_for(
        &self,
        sentence_id: &str,
    ) -> Result<Vec<SubmissionRecord>, RecorderError> {
        let submissions: Vec<SubmissionRecord> = self.read_collection(SUBMISSIONS_FILE).await?;
        Ok(submissions
            .into_iter()
            .filter(|r| r.sentence_id == sentence_id)
            .collect())
    }
}
