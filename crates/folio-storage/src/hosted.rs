use crate::traits::{validate_component, Storage, StorageError, StorageResult};
use async_trait::async_trait;
use folio_core::StorageBackend;
use reqwest::StatusCode;

/// Hosted object-store backend
///
/// Speaks the hosted service's HTTP object API with a service key:
/// `POST /storage/v1/object/{bucket}/{key}` to write, public URLs under
/// `/storage/v1/object/public/{bucket}/{key}`.
#[derive(Clone)]
pub struct HostedStorage {
    http: reqwest::Client,
    base_url: String,
    service_key: String,
}

impl HostedStorage {
    pub fn new(base_url: String, service_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            service_key,
        }
    }

    fn object_endpoint(&self, bucket: &str, key: &str) -> String {
        format!("{}/storage/v1/object/{}/{}", self.base_url, bucket, key)
    }
}

#[async_trait]
impl Storage for HostedStorage {
    async fn put(
        &self,
        bucket: &str,
        key: &str,
        content_type: &str,
        data: Vec<u8>,
    ) -> StorageResult<()> {
        validate_component(bucket)?;
        validate_component(key)?;

        let size = data.len();
        let start = std::time::Instant::now();

        let response = self
            .http
            .post(self.object_endpoint(bucket, key))
            .bearer_auth(&self.service_key)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(data)
            .send()
            .await
            .map_err(|e| StorageError::PutFailed(format!("Request failed: {}", e)))?;

        let status = response.status();
        if status == StatusCode::CONFLICT {
            return Err(StorageError::AlreadyExists(format!("{}/{}", bucket, key)));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StorageError::PutFailed(format!(
                "Object store returned {}: {}",
                status, body
            )));
        }

        tracing::info!(
            bucket = %bucket,
            key = %key,
            size_bytes = size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Hosted storage put successful"
        );

        Ok(())
    }

    fn public_url(&self, bucket: &str, key: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.base_url, bucket, key
        )
    }

    async fn exists(&self, bucket: &str, key: &str) -> StorageResult<bool> {
        validate_component(bucket)?;
        validate_component(key)?;

        let response = self
            .http
            .head(self.object_endpoint(bucket, key))
            .bearer_auth(&self.service_key)
            .send()
            .await
            .map_err(|e| StorageError::BackendError(format!("Request failed: {}", e)))?;

        match response.status() {
            status if status.is_success() => Ok(true),
            StatusCode::NOT_FOUND => Ok(false),
            status => Err(StorageError::BackendError(format!(
                "Object store returned {}",
                status
            ))),
        }
    }

    async fn delete(&self, bucket: &str, key: &str) -> StorageResult<()> {
        validate_component(bucket)?;
        validate_component(key)?;

        let response = self
            .http
            .delete(self.object_endpoint(bucket, key))
            .bearer_auth(&self.service_key)
            .send()
            .await
            .map_err(|e| StorageError::DeleteFailed(format!("Request failed: {}", e)))?;

        let status = response.status();
        if status.is_success() || status == StatusCode::NOT_FOUND {
            tracing::info!(bucket = %bucket, key = %key, "Hosted storage delete successful");
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(StorageError::DeleteFailed(format!(
                "Object store returned {}: {}",
                status, body
            )))
        }
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::Hosted
    }
}
