//! In-memory storage backend for tests
//!
//! Keeps objects in a map and counts writes so tests can assert that the
//! uploader was (or was not) invoked. A fault flag makes every `put` fail,
//! for exercising upload-failure paths.

use crate::traits::{validate_component, Storage, StorageError, StorageResult};
use async_trait::async_trait;
use folio_core::StorageBackend;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
pub struct MemoryStorage {
    objects: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    put_log: Arc<Mutex<Vec<String>>>,
    put_count: Arc<AtomicUsize>,
    fail_puts: Arc<AtomicBool>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn object_id(bucket: &str, key: &str) -> String {
        format!("{}/{}", bucket, key)
    }

    /// Number of `put` calls attempted (including failed ones).
    pub fn put_count(&self) -> usize {
        self.put_count.load(Ordering::SeqCst)
    }

    /// Attempted puts as `bucket/key`, in call order.
    pub fn put_log(&self) -> Vec<String> {
        self.put_log.lock().unwrap().clone()
    }

    /// Make every subsequent `put` fail with `PutFailed`.
    pub fn set_fail_puts(&self, fail: bool) {
        self.fail_puts.store(fail, Ordering::SeqCst);
    }

    pub fn has_object(&self, bucket: &str, key: &str) -> bool {
        self.objects
            .lock()
            .unwrap()
            .contains_key(&Self::object_id(bucket, key))
    }

    pub fn object_count(&self) -> usize {
        self.objects.lock().unwrap().len()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn put(
        &self,
        bucket: &str,
        key: &str,
        _content_type: &str,
        data: Vec<u8>,
    ) -> StorageResult<()> {
        validate_component(bucket)?;
        validate_component(key)?;

        self.put_count.fetch_add(1, Ordering::SeqCst);
        self.put_log
            .lock()
            .unwrap()
            .push(Self::object_id(bucket, key));

        if self.fail_puts.load(Ordering::SeqCst) {
            return Err(StorageError::PutFailed(
                "Simulated storage fault".to_string(),
            ));
        }

        let id = Self::object_id(bucket, key);
        let mut objects = self.objects.lock().unwrap();
        if objects.contains_key(&id) {
            return Err(StorageError::AlreadyExists(id));
        }
        objects.insert(id, data);
        Ok(())
    }

    fn public_url(&self, bucket: &str, key: &str) -> String {
        format!("https://storage.example.com/{}/{}", bucket, key)
    }

    async fn exists(&self, bucket: &str, key: &str) -> StorageResult<bool> {
        Ok(self.has_object(bucket, key))
    }

    async fn delete(&self, bucket: &str, key: &str) -> StorageResult<()> {
        self.objects
            .lock()
            .unwrap()
            .remove(&Self::object_id(bucket, key));
        Ok(())
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::Local
    }
}
