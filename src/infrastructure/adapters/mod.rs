//! Platform adapters

pub mod local;
pub mod mattermost;

pub use local::{ConsoleBot, LocalPlatform};
pub use mattermost::{MattermostClient, MattermostPlatform};
