//! Object-store key derivation.
//!
//! Recordings are namespaced by the entry they belong to and stamped
//! with the upload time so successive takes never collide.

use chrono::Utc;

/// Key for a recording saved against an entry.
pub fn recording_key(entry_id: &str, timestamp_ms: i64) -> String {
    format!("recordings/{entry_id}/{timestamp_ms}.mp3")
}

/// Key for a recording submitted for review.
pub fn submission_key(entry_id: &str, timestamp_ms: i64) -> String {
    format!("submissions/{entry_id}/{timestamp_ms}.mp3")
}

/// Key for a user's profile photo. Re-uploads overwrite in place.
pub fn profile_photo_key(user_id: &str) -> String {
    format!("profilePic/{user_id}")
}

/// Current wall-clock timestamp in milliseconds, for key stamping.
pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}
