/// Playback transport state machine.
///
/// State transitions:
/// ```text
/// empty → loading → playing ⇄ paused
///            ↑          ↓
///            │       completed
///            └── any state re-enters loading on a new load;
///                release (or a failed load) returns to empty
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportState {
    Empty,
    Loading,
    Playing,
    Paused,
    Completed,
}

impl TransportState {
    pub fn is_playing(&self) -> bool {
        matches!(self, Self::Playing)
    }

    /// Whether a resource is loaded (toggle/seek intents are valid).
    pub fn has_resource(&self) -> bool {
        matches!(self, Self::Playing | Self::Paused | Self::Completed)
    }
}

/// Read-only projection of a transport controller's state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportSnapshot {
    pub state: TransportState,
    pub location: Option<String>,
    /// Elapsed position in milliseconds, never exceeds `duration_ms`.
    pub elapsed_ms: u64,
    /// Total duration in milliseconds, 0 until a resource is loaded.
    pub duration_ms: u64,
    /// Distinguishes "never started" from "paused".
    pub has_started: bool,
}

impl TransportSnapshot {
    pub fn is_playing(&self) -> bool {
        self.state.is_playing()
    }
}

/// Direction for a fixed-step relative seek.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeekDirection {
    Forward,
    Backward,
}

/// Capture session state.
///
/// A session is either actively capturing or holds a finished temp
/// resource, never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureStatus {
    Idle,
    Recording,
    Finished { temp_location: String },
}

impl CaptureStatus {
    pub fn is_recording(&self) -> bool {
        matches!(self, Self::Recording)
    }

    pub fn temp_location(&self) -> Option<&str> {
        match self {
            Self::Finished { temp_location } => Some(temp_location),
            _ => None,
        }
    }
}

/// Read-only projection of a capture pipeline's state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureSnapshot {
    pub is_recording: bool,
    pub has_recording: bool,
    pub temp_location: Option<String>,
    /// True while a save/submit upload is in flight; the presentation
    /// layer disables the triggers while set.
    pub is_uploading: bool,
}
