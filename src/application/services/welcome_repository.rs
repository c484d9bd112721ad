use std::sync::Arc;

use crate::application::errors::StoreError;
use crate::domain::entities::{ScopeKey, WelcomeMessage};
use crate::domain::traits::KeyValueStore;

/// Namespace prefix for the app's entries in the platform store
pub const STORE_PREFIX: &str = "wb";

/// Reads and writes one welcome message per scope.
///
/// Holds no copy of the data; every call goes to the store.
pub struct WelcomeMessageRepository {
    store: Arc<dyn KeyValueStore>,
}

impl WelcomeMessageRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub async fn get(&self, scope: &ScopeKey) -> Result<Option<WelcomeMessage>, StoreError> {
        let text = self.store.get(STORE_PREFIX, scope.as_str()).await?;
        Ok(text.map(|text| WelcomeMessage::new(scope.clone(), text)))
    }

    pub async fn set(&self, message: &WelcomeMessage) -> Result<(), StoreError> {
        self.store
            .set(STORE_PREFIX, message.scope.as_str(), &message.text)
            .await
    }

    pub async fn delete(&self, scope: &ScopeKey) -> Result<(), StoreError> {
        self.store.delete(STORE_PREFIX, scope.as_str()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::MemoryStore;

    fn repository() -> (Arc<MemoryStore>, WelcomeMessageRepository) {
        let store = Arc::new(MemoryStore::new());
        (store.clone(), WelcomeMessageRepository::new(store))
    }

    #[tokio::test]
    async fn unknown_scope_is_not_found() {
        let (_, repo) = repository();
        let found = repo.get(&ScopeKey::for_channel("never-written")).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn set_then_get_returns_text_verbatim() {
        let (_, repo) = repository();
        let scope = ScopeKey::for_channel("c1");
        let text = "  Welcome!\n\n**Rules**: be kind 🙂  ";

        repo.set(&WelcomeMessage::new(scope.clone(), text)).await.unwrap();

        let found = repo.get(&scope).await.unwrap().unwrap();
        assert_eq!(found.text, text);
        assert_eq!(found.scope, scope);
    }

    #[tokio::test]
    async fn last_write_wins() {
        let (_, repo) = repository();
        let scope = ScopeKey::for_channel("c1");

        repo.set(&WelcomeMessage::new(scope.clone(), "first")).await.unwrap();
        repo.set(&WelcomeMessage::new(scope.clone(), "second")).await.unwrap();

        assert_eq!(repo.get(&scope).await.unwrap().unwrap().text, "second");
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let (_, repo) = repository();
        let scope = ScopeKey::for_channel("c1");

        repo.delete(&scope).await.unwrap();
        assert!(repo.get(&scope).await.unwrap().is_none());

        repo.set(&WelcomeMessage::new(scope.clone(), "hello")).await.unwrap();
        repo.delete(&scope).await.unwrap();
        repo.delete(&scope).await.unwrap();
        assert!(repo.get(&scope).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn scopes_are_independent() {
        let (store, repo) = repository();
        let a = ScopeKey::for_channel("a");
        let b = ScopeKey::for_channel("b");

        repo.set(&WelcomeMessage::new(a.clone(), "for a")).await.unwrap();

        assert!(repo.get(&b).await.unwrap().is_none());
        assert_eq!(
            store.get(STORE_PREFIX, "a").await.unwrap().as_deref(),
            Some("for a")
        );
    }
}
