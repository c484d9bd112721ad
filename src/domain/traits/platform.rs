use std::sync::Arc;

use crate::application::errors::{BotError, StoreError};
use crate::domain::entities::CallContext;
use super::{Bot, KeyValueStore};

/// Builds the platform collaborators for a single call.
///
/// Credentials (site URL, bot token) travel with each call's context, so a
/// store or bot is only valid for the call it was built from.
pub trait Platform: Send + Sync {
    fn store(&self, context: &CallContext) -> Result<Arc<dyn KeyValueStore>, StoreError>;

    fn bot(&self, context: &CallContext) -> Result<Arc<dyn Bot>, BotError>;
}
