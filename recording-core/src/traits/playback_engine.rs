use async_trait::async_trait;

use crate::models::error::RecorderError;

/// Interface for the device audio playback engine.
///
/// An engine holds at most one loaded resource at a time; the
/// controller releases the previous resource before loading a new one.
/// All calls suspend at the device boundary and resume on the same
/// logical thread.
#[async_trait]
pub trait PlaybackEngine: Send + Sync {
    /// Resolve and prepare the resource at `location`.
    ///
    /// Returns the total duration in milliseconds once metadata is
    /// available. Fails with `ResourceUnavailable` if the reference
    /// cannot be resolved, `PlaybackEngine` on decode faults.
    async fn load(&self, location: &str) -> Result<u64, RecorderError>;

    /// Begin playback from an absolute position.
    async fn play(&self, position_ms: u64) -> Result<(), RecorderError>;

    /// Pause playback, keeping the resource loaded.
    async fn pause(&self) -> Result<(), RecorderError>;

    /// Resume playback from the paused position.
    async fn resume(&self) -> Result<(), RecorderError>;

    /// Stop and discard the loaded resource. Must not fail; a missing
    /// resource is a no-op.
    async fn unload(&self);
}
