//! Folio Storage Library
//!
//! This crate provides the blob-store abstraction and its backends. Assets
//! are addressed by `(bucket, key)`; the three buckets (covers, thumbnails,
//! dataset files) are fixed by `folio_core::constants`.
//!
//! # Object key format
//!
//! Keys are generated per upload from the owning user and a millisecond
//! timestamp: `{owner_id}-{unix_millis}[-{slot}].{ext}`. Keys must not
//! contain `..`, a leading `/`, or path separators. Key generation is
//! centralized in the `keys` module so all backends stay consistent.

pub mod factory;
pub mod hosted;
pub mod keys;
pub mod local;
pub mod memory;
pub mod traits;

// Re-export commonly used types
pub use factory::create_storage;
pub use folio_core::StorageBackend;
pub use hosted::HostedStorage;
pub use keys::object_key;
pub use local::LocalStorage;
pub use memory::MemoryStorage;
pub use traits::{Storage, StorageError, StorageResult};
