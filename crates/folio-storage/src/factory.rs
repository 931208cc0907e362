//! Storage backend factory

use std::sync::Arc;

use folio_core::{Config, StorageBackend};

use crate::hosted::HostedStorage;
use crate::local::LocalStorage;
use crate::traits::{Storage, StorageError, StorageResult};

/// Create the storage backend selected by configuration.
pub async fn create_storage(config: &Config) -> StorageResult<Arc<dyn Storage>> {
    match config.storage_backend() {
        StorageBackend::Local => {
            let base_path = config.local_storage_path().ok_or_else(|| {
                StorageError::ConfigError("LOCAL_STORAGE_PATH is not set".to_string())
            })?;
            let base_url = config.local_storage_base_url().ok_or_else(|| {
                StorageError::ConfigError("LOCAL_STORAGE_BASE_URL is not set".to_string())
            })?;
            let storage = LocalStorage::new(base_path, base_url.to_string()).await?;
            tracing::info!(base_path = %base_path, "Using local storage backend");
            Ok(Arc::new(storage))
        }
        StorageBackend::Hosted => {
            let base_url = config.hosted_storage_url().ok_or_else(|| {
                StorageError::ConfigError("HOSTED_STORAGE_URL is not set".to_string())
            })?;
            let service_key = config.hosted_storage_service_key().ok_or_else(|| {
                StorageError::ConfigError("HOSTED_STORAGE_SERVICE_KEY is not set".to_string())
            })?;
            tracing::info!(base_url = %base_url, "Using hosted storage backend");
            Ok(Arc::new(HostedStorage::new(
                base_url.to_string(),
                service_key.to_string(),
            )))
        }
    }
}
