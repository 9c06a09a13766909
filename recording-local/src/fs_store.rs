use std::path::{Path, PathBuf};

use async_trait::async_trait;

use recording_core::models::error::RecorderError;
use recording_core::traits::object_store::ObjectStore;

/// Object storage rooted at a local directory.
///
/// `upload` copies the object at the temp location to `{root}/{key}`
/// and returns the destination path as the remote location.
pub struct FsObjectStore {
    root: PathBuf,
}

impl FsObjectStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn destination(&self, key: &str) -> Result<PathBuf, RecorderError> {
        // Keys are derived (`recordings/{entry}/{ts}.mp3` etc.), never
        // user-supplied paths; reject anything that escapes the root.
        if key.is_empty() || Path::new(key).components().any(|c| {
            matches!(
                c,
                std::path::Component::ParentDir | std::path::Component::RootDir
            )
        }) {
            return Err(RecorderError::InvalidInput(format!("bad object key: {key}")));
        }
        Ok(self.root.join(key))
    }
}

#[async_trait]
impl ObjectStore for FsObjectStore {
    async fn upload(&self, local: &str, key: &str) -> Result<String, RecorderError> {
        let dest = self.destination(key)?;
        if let Some(parent) = dest.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| RecorderError::Upload(format!("creating {}: {e}", parent.display())))?;
        }

        tokio::fs::copy(local, &dest)
            .await
            .map_err(|e| RecorderError::Upload(format!("storing {local} under {key}: {e}")))?;

        log::debug!("stored {local} under {}", dest.display());
        Ok(dest.to_string_lossy().into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn upload_copies_under_the_key() {
        let dir = tempfile::tempdir().unwrap();
        let temp = dir.path().join("take.mp3");
        tokio::fs::write(&temp, b"audio bytes").await.unwrap();

        let store = FsObjectStore::new(dir.path().join("bucket"));
        let remote = store
            .upload(temp.to_str().unwrap(), "recordings/entry42/1700.mp3")
            .await
            .unwrap();

        let stored = tokio::fs::read(&remote).await.unwrap();
        assert_eq!(stored, b"audio bytes");
        assert!(remote.ends_with("recordings/entry42/1700.mp3"));
        // The temp file is untouched; consuming it is the caller's call.
        assert!(tokio::fs::try_exists(&temp).await.unwrap());
    }

    #[tokio::test]
    async fn missing_local_object_is_an_upload_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsObjectStore::new(dir.path());

        let err = store
            .upload("/nowhere/take.mp3", "recordings/e/1.mp3")
            .await
            .unwrap_err();
        assert!(matches!(err, RecorderError::Upload(_)));
    }

    #[tokio::test]
    async fn escaping_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsObjectStore::new(dir.path());

        let err = store.upload("take.mp3", "../outside.mp3").await.unwrap_err();
        assert!(matches!(err, RecorderError::InvalidInput(_)));
    }
}
