//! # recording-core
//!
//! Platform-agnostic core for a spoken-language recording app.
//!
//! Provides playback transport control, capture session orchestration,
//! and the save/submit upload pipeline. Device audio engines and the
//! remote stores are external collaborators that implement this crate's
//! traits and plug into the generic controllers.
//!
//! ## Architecture
//!
//! ```text
//! recording-core (this crate)
//! ├── traits/     ← PlaybackEngine, CaptureEngine, ObjectStore, MetadataStore
//! ├── models/     ← RecorderError, TransportState, CaptureStatus, UploadOutcome, ...
//! ├── transport/  ← TransportController (load/toggle/seek/release)
//! ├── pipeline/   ← CapturePipeline (record → save/submit), NoticeBoard
//! ├── storage/    ← object-store key derivation
//! └── entries     ← EntryService (lexical entry create/update)
//! ```

pub mod entries;
pub mod models;
pub mod pipeline;
pub mod storage;
pub mod traits;
pub mod transport;

// Re-export key types at crate root for convenience.
pub use entries::EntryService;
pub use models::entry::{Entry, EntryDraft};
pub use models::error::RecorderError;
pub use models::outcome::UploadOutcome;
pub use models::state::{
    CaptureSnapshot, CaptureStatus, SeekDirection, TransportSnapshot, TransportState,
};
pub use models::submission::SubmissionRecord;
pub use pipeline::capture::CapturePipeline;
pub use pipeline::notice::{Notice, NoticeBoard};
pub use traits::capture_engine::CaptureEngine;
pub use traits::metadata_store::MetadataStore;
pub use traits::object_store::ObjectStore;
pub use traits::playback_engine::PlaybackEngine;
pub use transport::controller::TransportController;
