use async_trait::async_trait;

use crate::models::error::RecorderError;

/// Interface for the device microphone capture engine.
///
/// Implementations wrap the platform recording API. The pipeline
/// enforces strict start/stop alternation; an engine only ever sees
/// one capture in flight.
#[async_trait]
pub trait CaptureEngine: Send + Sync {
    /// Whether microphone permission has been granted. Checked before
    /// any capture is started; prompting the user is the presentation
    /// layer's job.
    fn permission_granted(&self) -> bool;

    /// Begin capturing audio.
    async fn start(&self) -> Result<(), RecorderError>;

    /// Stop capturing and finalize the local temp resource.
    ///
    /// Returns the temp location of the captured audio. Fails with
    /// `CaptureEngine` if the recording cannot be finalized.
    async fn stop(&self) -> Result<String, RecorderError>;
}
