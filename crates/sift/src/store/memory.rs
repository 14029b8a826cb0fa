use super::{object_key, ObjectStore};
use sift_core::{Error, Result};

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// An [`ObjectStore`] kept in process memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    objects: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.objects.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.objects.read().await.is_empty()
    }
}

#[async_trait]
impl ObjectStore for MemoryStore {
    async fn get(&self, directory: &str, key: &str) -> Result<Vec<u8>> {
        let path = object_key(directory, key);

        self.objects
            .read()
            .await
            .get(&path)
            .cloned()
            .ok_or_else(|| Error::record_not_found(path))
    }

    async fn put(&self, directory: &str, key: &str, data: Vec<u8>) -> Result<bool> {
        let path = object_key(directory, key);
        let mut objects = self.objects.write().await;

        if objects.contains_key(&path) {
            tracing::debug!(key = %path, "object already exists; not overwriting");
            return Ok(false);
        }

        tracing::debug!(key = %path, size = data.len(), "storing object");
        objects.insert(path, data);
        Ok(true)
    }

    async fn delete(&self, directory: &str, key: &str) -> Result<bool> {
        let path = object_key(directory, key);
        let removed = self.objects.write().await.remove(&path).is_some();

        tracing::debug!(key = %path, removed, "deleting object");
        Ok(removed)
    }
}
