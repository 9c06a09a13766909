//! Lexical entry create/update.
//!
//! A thin context object constructed at the composition root and handed
//! to the add-entry screen; no process-wide entry list is kept here.

use std::sync::Arc;

use crate::models::entry::{Entry, EntryDraft};
use crate::models::error::RecorderError;
use crate::traits::metadata_store::MetadataStore;

pub struct EntryService<M: MetadataStore> {
    store: Arc<M>,
}

impl<M: MetadataStore> EntryService<M> {
    pub fn new(store: Arc<M>) -> Self {
        Self { store }
    }

    /// Create a new entry from the draft, returning its identifier.
    ///
    /// Empty drafts are rejected before any I/O.
    pub async fn add_entry(&self, draft: &EntryDraft) -> Result<String, RecorderError> {
        if draft.is_empty() {
            return Err(RecorderError::InvalidInput("entry draft is empty".into()));
        }
        self.store.create_entry(draft).await
    }

    /// Overwrite an existing entry's fields.
    pub async fn update_entry(&self, id: &str, draft: &EntryDraft) -> Result<(), RecorderError> {
        if id.trim().is_empty() {
            return Err(RecorderError::InvalidInput("missing entry identifier".into()));
        }
        if draft.is_empty() {
            return Err(RecorderError::InvalidInput("entry draft is empty".into()));
        }
        self.store.update_entry(id, draft).await
    }

    /// Fetch one entry, e.g. to pre-populate the edit form.
    pub async fn entry(&self, id: &str) -> Result<Option<Entry>, RecorderError> {
        self.store.entry(id).await
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use parking_lot::Mutex;

    use super::*;
    use crate::models::submission::SubmissionRecord;

    #[derive(Default)]
    struct MemoryStore {
        entries: Mutex<Vec<Entry>>,
    }

    #[async_trait]
    impl MetadataStore for MemoryStore {
        async fn create_entry(&self, draft: &EntryDraft) -> Result<String, RecorderError> {
            let mut entries = self.entries.lock();
            let id = format!("entry{}", entries.len() + 1);
            entries.push(Entry {
                id: id.clone(),
                fields: draft.clone(),
            });
            Ok(id)
        }

        async fn update_entry(&self, id: &str, draft: &EntryDraft) -> Result<(), RecorderError> {
            let mut entries = self.entries.lock();
            match entries.iter_mut().find(|e| e.id == id) {
                Some(entry) => {
                    entry.fields = draft.clone();
                    Ok(())
                }
                None => Err(RecorderError::MetadataWrite(format!("unknown entry {id}"))),
            }
        }

        async fn entry(&self, id: &str) -> Result<Option<Entry>, RecorderError> {
            Ok(self.entries.lock().iter().find(|e| e.id == id).cloned())
        }

        async fn add_submission(&self, _record: &SubmissionRecord) -> Result<(), RecorderError> {
            Ok(())
        }

        async fn submissions_for(
            &self,
            _sentence_id: &str,
        ) -> Result<Vec<SubmissionRecord>, RecorderError> {
            Ok(Vec::new())
        }
    }

    fn draft(phrase: &str, topic: &str) -> EntryDraft {
        EntryDraft {
            phrase: Some(phrase.into()),
            topic: Some(topic.into()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn add_then_update_round_trip() {
        let service = EntryService::new(Arc::new(MemoryStore::default()));

        let id = service.add_entry(&draft("budyari", "greetings")).await.unwrap();
        let stored = service.entry(&id).await.unwrap().unwrap();
        assert_eq!(stored.fields.phrase.as_deref(), Some("budyari"));
        // Topic stays its own field; it never lands in the gloss.
        assert_eq!(stored.fields.topic.as_deref(), Some("greetings"));
        assert_eq!(stored.fields.translation_gloss, None);

        service.update_entry(&id, &draft("budyari gamarada", "greetings")).await.unwrap();
        let stored = service.entry(&id).await.unwrap().unwrap();
        assert_eq!(stored.fields.phrase.as_deref(), Some("budyari gamarada"));
    }

    #[tokio::test]
    async fn empty_drafts_are_rejected_before_io() {
        let service = EntryService::new(Arc::new(MemoryStore::default()));

        let err = service.add_entry(&EntryDraft::default()).await.unwrap_err();
        assert!(matches!(err, RecorderError::InvalidInput(_)));
        assert!(service.store.entries.lock().is_empty());

        let err = service
            .update_entry("", &draft("budyari", "greetings"))
            .await
            .unwrap_err();
        assert!(matches!(err, RecorderError::InvalidInput(_)));
    }
}
