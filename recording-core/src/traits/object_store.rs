use async_trait::async_trait;

use crate::models::error::RecorderError;

/// Interface for the remote object storage service.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Upload the object at `local` under `key`.
    ///
    /// Returns a fetchable reference to the stored object. Fails with
    /// `Upload` on network/storage faults.
    async fn upload(&self, local: &str, key: &str) -> Result<String, RecorderError>;
}
