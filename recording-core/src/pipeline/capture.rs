use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::time::Instant;

use crate::models::error::RecorderError;
use crate::models::outcome::UploadOutcome;
use crate::models::state::{CaptureSnapshot, CaptureStatus};
use crate::models::submission::SubmissionRecord;
use crate::storage::keys;
use crate::traits::capture_engine::CaptureEngine;
use crate::traits::metadata_store::MetadataStore;
use crate::traits::object_store::ObjectStore;

/// Minimum observable duration of a successful save.
///
/// Uploads that finish faster are held until the floor elapses so the
/// loading indicator never flashes. Failures return immediately.
pub const UPLOAD_FLOOR_MS: u64 = 3000;

struct PipelineShared {
    status: CaptureStatus,
    uploading: bool,
}

/// Owns one in-progress capture and its path to durable storage.
///
/// Scoped to the recording view. `start`/`stop` alternate strictly; the
/// finished temp resource is consumed by a successful save or submit.
pub struct CapturePipeline<C, S, M>
where
    C: CaptureEngine,
    S: ObjectStore,
    M: MetadataStore,
{
    engine: Arc<C>,
    store: Arc<S>,
    metadata: Arc<M>,
    shared: Arc<Mutex<PipelineShared>>,
}

impl<C, S, M> CapturePipeline<C, S, M>
where
    C: CaptureEngine,
    S: ObjectStore,
    M: MetadataStore,
{
    pub fn new(engine: Arc<C>, store: Arc<S>, metadata: Arc<M>) -> Self {
        Self {
            engine,
            store,
            metadata,
            shared: Arc::new(Mutex::new(PipelineShared {
                status: CaptureStatus::Idle,
                uploading: false,
            })),
        }
    }

    /// Read-only snapshot for the presentation layer.
    pub fn snapshot(&self) -> CaptureSnapshot {
        let s = self.shared.lock();
        CaptureSnapshot {
            is_recording: s.status.is_recording(),
            has_recording: s.status.temp_location().is_some(),
            temp_location: s.status.temp_location().map(str::to_string),
            is_uploading: s.uploading,
        }
    }

    /// Begin a capture session.
    ///
    /// A previous finished take is discarded; its temp location is
    /// overwritten when this capture stops.
    pub async fn start_capture(&self) -> Result<(), RecorderError> {
        if !self.engine.permission_granted() {
            return Err(RecorderError::PermissionDenied);
        }
        {
            let s = self.shared.lock();
            if s.status.is_recording() {
                return Err(RecorderError::AlreadyCapturing);
            }
        }

        self.engine.start().await?;
        self.shared.lock().status = CaptureStatus::Recording;
        Ok(())
    }

    /// Stop the active capture and finalize the temp resource.
    ///
    /// On an engine fault the session is left in a safe no-recording
    /// state. Calling while idle fails without side effects.
    pub async fn stop_capture(&self) -> Result<String, RecorderError> {
        {
            let s = self.shared.lock();
            if !s.status.is_recording() {
                return Err(RecorderError::InvalidInput("no capture in progress".into()));
            }
        }

        match self.engine.stop().await {
            Ok(temp_location) => {
                self.shared.lock().status = CaptureStatus::Finished {
                    temp_location: temp_location.clone(),
                };
                Ok(temp_location)
            }
            Err(e) => {
                log::error!("capture engine failed to finalize recording: {e}");
                self.shared.lock().status = CaptureStatus::Idle;
                Err(e)
            }
        }
    }

    /// Persist a finished take to durable storage under the entry.
    ///
    /// Successful uploads faster than [`UPLOAD_FLOOR_MS`] are held to
    /// the floor. On success the temp reference is consumed and the
    /// outcome carries the remote location in its place.
    pub async fn save_to_remote(&self, temp_location: &str, entry_id: &str) -> UploadOutcome {
        if let Err(e) = validate_upload_input(temp_location, entry_id) {
            return UploadOutcome::failed(e);
        }

        let key = keys::recording_key(entry_id, keys::now_ms());
        let started = Instant::now();
        self.set_uploading(true);
        let result = self.store.upload(temp_location, &key).await;

        match result {
            Ok(remote_location) => {
                let elapsed = started.elapsed();
                if elapsed < Duration::from_millis(UPLOAD_FLOOR_MS) {
                    tokio::time::sleep(Duration::from_millis(UPLOAD_FLOOR_MS) - elapsed).await;
                }
                self.consume_temp(temp_location);
                self.set_uploading(false);
                UploadOutcome::ok(remote_location)
            }
            Err(e) => {
                log::warn!("saving recording for entry {entry_id} failed: {e}");
                self.set_uploading(false);
                UploadOutcome::failed(e)
            }
        }
    }

    /// Upload a take for review and record the submission.
    ///
    /// One-way path with no minimum floor. A metadata-write failure
    /// after a successful upload is reported as a failure; the uploaded
    /// object is left in place.
    pub async fn submit_for_review(
        &self,
        temp_location: &str,
        entry_id: &str,
        category: &str,
    ) -> UploadOutcome {
        if let Err(e) = validate_upload_input(temp_location, entry_id) {
            return UploadOutcome::failed(e);
        }

        let key = keys::submission_key(entry_id, keys::now_ms());
        self.set_uploading(true);
        let remote_location = match self.store.upload(temp_location, &key).await {
            Ok(remote) => remote,
            Err(e) => {
                log::warn!("submission upload for entry {entry_id} failed: {e}");
                self.set_uploading(false);
                return UploadOutcome::failed(e);
            }
        };

        let record = SubmissionRecord::new(entry_id, category, &remote_location);
        if let Err(e) = self.metadata.add_submission(&record).await {
            // Orphaned object accepted; no compensating deletion.
            log::warn!(
                "submission record write failed for entry {entry_id}; uploaded object {remote_location} is orphaned: {e}"
            );
            self.set_uploading(false);
            return UploadOutcome::failed(e);
        }

        self.consume_temp(temp_location);
        self.set_uploading(false);
        UploadOutcome::ok(remote_location)
    }

    /// Store a freshly taken profile photo under the user's key.
    ///
    /// Overwrites any previous photo; no floor, no metadata record.
    pub async fn save_profile_photo(&self, local_location: &str, user_id: &str) -> UploadOutcome {
        if let Err(e) = validate_upload_input(local_location, user_id) {
            return UploadOutcome::failed(e);
        }

        let key = keys::profile_photo_key(user_id);
        match self.store.upload(local_location, &key).await {
            Ok(remote) => UploadOutcome::ok(remote),
            Err(e) => {
                log::warn!("profile photo upload for {user_id} failed: {e}");
                UploadOutcome::failed(e)
            }
        }
    }

    /// Reset the session, e.g. when the recording view loses focus.
    pub fn reset(&self) {
        let mut s = self.shared.lock();
        s.status = CaptureStatus::Idle;
        s.uploading = false;
    }

    fn set_uploading(&self, uploading: bool) {
        self.shared.lock().uploading = uploading;
    }

    /// Invalidate the temp reference once its content is durable.
    fn consume_temp(&self, temp_location: &str) {
        let mut s = self.shared.lock();
        if s.status.temp_location() == Some(temp_location) {
            s.status = CaptureStatus::Idle;
        }
    }
}

fn validate_upload_input(location: &str, identifier: &str) -> Result<(), RecorderError> {
    if location.trim().is_empty() {
        return Err(RecorderError::InvalidInput("missing temp location".into()));
    }
    if identifier.trim().is_empty() {
        return Err(RecorderError::InvalidInput("missing identifier".into()));
    }
    Ok(())
}
