use super::error::RecorderError;

/// Result of persisting a captured recording to durable storage.
///
/// Produced once per save/submit intent. Upload faults surface here as
/// `succeeded = false` rather than as errors; the presentation layer
/// only observes the flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadOutcome {
    pub succeeded: bool,
    /// Durable location of the uploaded object, present iff `succeeded`.
    pub remote_location: Option<String>,
    /// Failure cause, present iff not `succeeded`.
    pub error: Option<RecorderError>,
}

impl UploadOutcome {
    pub fn ok(remote_location: String) -> Self {
        Self {
            succeeded: true,
            remote_location: Some(remote_location),
            error: None,
        }
    }

    pub fn failed(error: RecorderError) -> Self {
        Self {
            succeeded: false,
            remote_location: None,
            error: Some(error),
        }
    }
}
