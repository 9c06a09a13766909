use serde::{Deserialize, Serialize};

/// User-editable fields of a lexical/sentence entry.
///
/// `topic` is its own field; it is never folded into the gloss.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryDraft {
    /// Sentence or word in the recorded language.
    pub phrase: Option<String>,
    pub phrase_gloss: Option<String>,
    /// English translation.
    pub translation: Option<String>,
    pub translation_gloss: Option<String>,
    pub topic: Option<String>,
}

impl EntryDraft {
    /// A draft with no content cannot be stored.
    pub fn is_empty(&self) -> bool {
        let filled = |f: &Option<String>| f.as_deref().is_some_and(|s| !s.trim().is_empty());
        !(filled(&self.phrase)
            || filled(&self.phrase_gloss)
            || filled(&self.translation)
            || filled(&self.translation_gloss)
            || filled(&self.topic))
    }
}

/// A stored lexical/sentence entry that recordings attach to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: String,
    #[serde(flatten)]
    pub fields: EntryDraft,
}
