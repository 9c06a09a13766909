pub mod capture_engine;
pub mod metadata_store;
pub mod object_store;
pub mod playback_engine;
