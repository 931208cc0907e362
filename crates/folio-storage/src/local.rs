use crate::traits::{validate_component, Storage, StorageError, StorageResult};
use async_trait::async_trait;
use folio_core::StorageBackend;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Local filesystem storage implementation
///
/// Each bucket maps to a directory under the base path; objects are served
/// from a configured base URL.
#[derive(Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
    base_url: String,
}

impl LocalStorage {
    /// Create a new LocalStorage instance
    ///
    /// # Arguments
    /// * `base_path` - Root directory for asset storage (e.g., "/var/lib/folio/assets")
    /// * `base_url` - Base URL for serving assets (e.g., "http://localhost:3000/assets")
    pub async fn new(base_path: impl Into<PathBuf>, base_url: String) -> StorageResult<Self> {
        let base_path = base_path.into();

        fs::create_dir_all(&base_path).await.map_err(|e| {
            StorageError::ConfigError(format!(
                "Failed to create storage directory {}: {}",
                base_path.display(),
                e
            ))
        })?;

        Ok(LocalStorage {
            base_path,
            base_url,
        })
    }

    /// Map a bucket and key to a filesystem path, rejecting components that
    /// would escape the base directory.
    fn object_path(&self, bucket: &str, key: &str) -> StorageResult<PathBuf> {
        validate_component(bucket)?;
        validate_component(key)?;
        Ok(self.base_path.join(bucket).join(key))
    }

    /// Ensure parent directory exists
    async fn ensure_parent_dir(&self, path: &Path) -> StorageResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl Storage for LocalStorage {
    async fn put(
        &self,
        bucket: &str,
        key: &str,
        _content_type: &str,
        data: Vec<u8>,
    ) -> StorageResult<()> {
        let path = self.object_path(bucket, key)?;
        let size = data.len();

        if fs::try_exists(&path).await.unwrap_or(false) {
            return Err(StorageError::AlreadyExists(format!("{}/{}", bucket, key)));
        }

        self.ensure_parent_dir(&path).await?;

        let start = std::time::Instant::now();

        let mut file = fs::File::create(&path).await.map_err(|e| {
            StorageError::PutFailed(format!("Failed to create file {}: {}", path.display(), e))
        })?;

        file.write_all(&data).await.map_err(|e| {
            StorageError::PutFailed(format!("Failed to write file {}: {}", path.display(), e))
        })?;

        file.sync_all().await.map_err(|e| {
            StorageError::PutFailed(format!("Failed to sync file {}: {}", path.display(), e))
        })?;

        tracing::info!(
            bucket = %bucket,
            key = %key,
            size_bytes = size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Local storage put successful"
        );

        Ok(())
    }

    fn public_url(&self, bucket: &str, key: &str) -> String {
        format!("{}/{}/{}", self.base_url.trim_end_matches('/'), bucket, key)
    }

    async fn exists(&self, bucket: &str, key: &str) -> StorageResult<bool> {
        let path = self.object_path(bucket, key)?;
        Ok(fs::try_exists(&path).await.unwrap_or(false))
    }

    async fn delete(&self, bucket: &str, key: &str) -> StorageResult<()> {
        let path = self.object_path(bucket, key)?;

        if !fs::try_exists(&path).await.unwrap_or(false) {
            return Ok(());
        }

        fs::remove_file(&path).await.map_err(|e| {
            StorageError::DeleteFailed(format!("Failed to delete file {}: {}", path.display(), e))
        })?;

        tracing::info!(bucket = %bucket, key = %key, "Local storage delete successful");

        Ok(())
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::Local
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    async fn storage(dir: &tempfile::TempDir) -> LocalStorage {
        LocalStorage::new(dir.path(), "http://localhost:3000/assets".to_string())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_put_and_exists() {
        let dir = tempdir().unwrap();
        let storage = storage(&dir).await;

        storage
            .put("book-covers", "owner-1-cover.png", "image/png", b"bytes".to_vec())
            .await
            .unwrap();

        assert!(storage.exists("book-covers", "owner-1-cover.png").await.unwrap());
        assert!(!storage.exists("book-covers", "missing.png").await.unwrap());
    }

    #[tokio::test]
    async fn test_duplicate_key_is_rejected() {
        let dir = tempdir().unwrap();
        let storage = storage(&dir).await;

        storage
            .put("thumbnails", "owner-1-thumb.png", "image/png", b"a".to_vec())
            .await
            .unwrap();

        let result = storage
            .put("thumbnails", "owner-1-thumb.png", "image/png", b"b".to_vec())
            .await;
        assert!(matches!(result, Err(StorageError::AlreadyExists(_))));
    }

    #[tokio::test]
    async fn test_path_traversal_rejected() {
        let dir = tempdir().unwrap();
        let storage = storage(&dir).await;

        let result = storage.exists("book-covers", "../../etc/passwd").await;
        assert!(matches!(result, Err(StorageError::InvalidKey(_))));

        let result = storage
            .put("..", "key.png", "image/png", b"x".to_vec())
            .await;
        assert!(matches!(result, Err(StorageError::InvalidKey(_))));
    }

    #[tokio::test]
    async fn test_public_url_shape() {
        let dir = tempdir().unwrap();
        let storage = storage(&dir).await;

        assert_eq!(
            storage.public_url("book-covers", "owner-1-cover.png"),
            "http://localhost:3000/assets/book-covers/owner-1-cover.png"
        );
    }

    #[tokio::test]
    async fn test_delete_missing_object_is_ok() {
        let dir = tempdir().unwrap();
        let storage = storage(&dir).await;

        assert!(storage.delete("thumbnails", "missing.png").await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_removes_object() {
        let dir = tempdir().unwrap();
        let storage = storage(&dir).await;

        storage
            .put("dataset-files", "owner-1.csv", "text/csv", b"a,b".to_vec())
            .await
            .unwrap();
        storage.delete("dataset-files", "owner-1.csv").await.unwrap();
        assert!(!storage.exists("dataset-files", "owner-1.csv").await.unwrap());
    }
}
