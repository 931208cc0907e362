//! Storage abstraction trait
//!
//! This module defines the Storage trait that all blob-store backends must
//! implement.

use async_trait::async_trait;
use folio_core::StorageBackend;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    PutFailed(String),

    #[error("Object already exists: {0}")]
    AlreadyExists(String),

    #[error("Delete failed: {0}")]
    DeleteFailed(String),

    #[error("Object not found: {0}")]
    NotFound(String),

    #[error("Invalid object key: {0}")]
    InvalidKey(String),

    #[error("Storage backend error: {0}")]
    BackendError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage abstraction trait
///
/// All blob-store backends (local filesystem, hosted object store) implement
/// this trait. Objects are addressed by `(bucket, key)`; writes are durable
/// once `put` resolves, and a record must only reference URLs of objects
/// whose `put` has completed.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Durably write an object under the given key.
    ///
    /// Fails with `AlreadyExists` when the key is already taken, and with
    /// `PutFailed` on backend faults. Not transactional with any subsequent
    /// record write; a crash between the two leaves the object orphaned.
    async fn put(
        &self,
        bucket: &str,
        key: &str,
        content_type: &str,
        data: Vec<u8>,
    ) -> StorageResult<()>;

    /// Publicly addressable URL for an object key.
    ///
    /// Pure URL construction; does not check that the object exists.
    fn public_url(&self, bucket: &str, key: &str) -> String;

    /// Check if an object exists
    async fn exists(&self, bucket: &str, key: &str) -> StorageResult<bool>;

    /// Delete an object by key; deleting a missing object is not an error
    async fn delete(&self, bucket: &str, key: &str) -> StorageResult<()>;

    /// Get the storage backend type
    fn backend_type(&self) -> StorageBackend;
}

/// Reject keys and bucket names that could escape their partition.
pub(crate) fn validate_component(component: &str) -> StorageResult<()> {
    if component.is_empty()
        || component.contains("..")
        || component.contains('/')
        || component.contains('\\')
    {
        return Err(StorageError::InvalidKey(format!(
            "Invalid bucket or key component: {}",
            component
        )));
    }
    Ok(())
}
