//! # recording-local
//!
//! Local filesystem backend for the recording-core store traits.
//!
//! Provides:
//! - `FsObjectStore` — object storage rooted at a directory; uploads
//!   copy the finished temp file under its derived key
//! - `JsonMetadataStore` — entry and submission collections persisted
//!   as JSON documents
//!
//! Useful for offline field work and for integration tests; a cloud
//! backend implements the same traits against its SDK.
//!
//! ## Usage
//! ```ignore
//! use std::sync::Arc;
//! use recording_local::{FsObjectStore, JsonMetadataStore};
//! use recording_core::CapturePipeline;
//!
//! let store = Arc::new(FsObjectStore::new("/data/recordings"));
//! let metadata = Arc::new(JsonMetadataStore::new("/data/db"));
//! let pipeline = CapturePipeline::new(engine, store, metadata);
//! ```

pub mod fs_store;
pub mod json_metadata;

pub use fs_store::FsObjectStore;
pub use json_metadata::JsonMetadataStore;
