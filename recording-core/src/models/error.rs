use thiserror::Error;

/// Errors that can occur across playback, capture, and upload operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecorderError {
    #[error("microphone permission denied")]
    PermissionDenied,

    #[error("resource unavailable: {0}")]
    ResourceUnavailable(String),

    #[error("playback engine error: {0}")]
    PlaybackEngine(String),

    #[error("capture engine error: {0}")]
    CaptureEngine(String),

    #[error("a capture session is already active")]
    AlreadyCapturing,

    #[error("no active resource")]
    NoActiveResource,

    #[error("upload failed: {0}")]
    Upload(String),

    #[error("metadata write failed: {0}")]
    MetadataWrite(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),
}
