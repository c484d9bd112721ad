//! Local platform for development/testing
//!
//! Keeps welcome messages in process memory and prints bot DMs to the log
//! instead of calling a Mattermost server.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::application::errors::{BotError, StoreError};
use crate::domain::entities::CallContext;
use crate::domain::traits::{Bot, KeyValueStore, Platform};
use crate::infrastructure::storage::MemoryStore;

/// Bot that logs direct messages and remembers them
#[derive(Default)]
pub struct ConsoleBot {
    sent: Mutex<Vec<(String, String)>>,
}

impl ConsoleBot {
    pub fn new() -> Self {
        Self::default()
    }

    /// `(user_id, text)` of every DM sent so far
    pub async fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().await.clone()
    }
}

#[async_trait]
impl Bot for ConsoleBot {
    async fn send_direct_message(&self, user_id: &str, text: &str) -> Result<(), BotError> {
        tracing::info!("[BOT -> {}] {}", user_id, text);
        self.sent
            .lock()
            .await
            .push((user_id.to_string(), text.to_string()));
        Ok(())
    }
}

/// One store and one bot shared by every call, ignoring call credentials
#[derive(Clone, Default)]
pub struct LocalPlatform {
    store: Arc<MemoryStore>,
    bot: Arc<ConsoleBot>,
}

impl LocalPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn memory_store(&self) -> Arc<MemoryStore> {
        self.store.clone()
    }

    pub fn console_bot(&self) -> Arc<ConsoleBot> {
        self.bot.clone()
    }
}

impl Platform for LocalPlatform {
    fn store(&self, _context: &CallContext) -> Result<Arc<dyn KeyValueStore>, StoreError> {
        Ok(self.store.clone())
    }

    fn bot(&self, _context: &CallContext) -> Result<Arc<dyn Bot>, BotError> {
        Ok(self.bot.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn calls_share_one_store() {
        let platform = LocalPlatform::new();
        let context = CallContext::default();

        platform.store(&context).unwrap().set("wb", "c1", "hi").await.unwrap();

        let again = platform.store(&context).unwrap();
        assert_eq!(again.get("wb", "c1").await.unwrap().as_deref(), Some("hi"));
        assert_eq!(platform.memory_store().len().await, 1);
    }

    #[tokio::test]
    async fn console_bot_records_messages() {
        let platform = LocalPlatform::new();
        platform
            .bot(&CallContext::default())
            .unwrap()
            .send_direct_message("u1", "hello")
            .await
            .unwrap();

        assert_eq!(
            platform.console_bot().sent().await,
            vec![("u1".to_string(), "hello".to_string())]
        );
    }
}
