use async_trait::async_trait;
use crate::application::errors::BotError;

/// Bot trait - the app's bot account on the messaging platform
#[async_trait]
pub trait Bot: Send + Sync {
    /// Send a direct message from the bot to a user
    async fn send_direct_message(&self, user_id: &str, text: &str) -> Result<(), BotError>;
}
