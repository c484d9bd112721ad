//! In-memory key-value store

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::application::errors::StoreError;
use crate::domain::traits::KeyValueStore;

/// Process-local store keyed by `(prefix, key)`.
///
/// Stands in for the platform store during local development and tests.
#[derive(Default)]
pub struct MemoryStore {
    kv: Arc<RwLock<HashMap<(String, String), String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.kv.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.kv.read().await.is_empty()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, prefix: &str, key: &str) -> Result<Option<String>, StoreError> {
        let kv = self.kv.read().await;
        Ok(kv.get(&(prefix.to_string(), key.to_string())).cloned())
    }

    async fn set(&self, prefix: &str, key: &str, value: &str) -> Result<(), StoreError> {
        let mut kv = self.kv.write().await;
        kv.insert((prefix.to_string(), key.to_string()), value.to_string());
        Ok(())
    }

    async fn delete(&self, prefix: &str, key: &str) -> Result<(), StoreError> {
        let mut kv = self.kv.write().await;
        kv.remove(&(prefix.to_string(), key.to_string()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn prefixes_do_not_collide() {
        let store = MemoryStore::new();
        store.set("a", "k", "one").await.unwrap();
        store.set("b", "k", "two").await.unwrap();

        assert_eq!(store.get("a", "k").await.unwrap().as_deref(), Some("one"));
        assert_eq!(store.get("b", "k").await.unwrap().as_deref(), Some("two"));
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn delete_missing_key_is_ok() {
        let store = MemoryStore::new();
        store.delete("a", "missing").await.unwrap();
        assert!(store.is_empty().await);
    }
}
