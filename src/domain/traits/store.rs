use async_trait::async_trait;
use crate::application::errors::StoreError;

/// Key-value store abstraction, namespaced by a short prefix.
///
/// Implementations are scoped to the acting bot's storage area.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Get a value. `None` when the key was never set or has been deleted.
    async fn get(&self, prefix: &str, key: &str) -> Result<Option<String>, StoreError>;

    /// Create or overwrite a value
    async fn set(&self, prefix: &str, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove a value. Removing an absent key is not an error.
    async fn delete(&self, prefix: &str, key: &str) -> Result<(), StoreError>;
}
