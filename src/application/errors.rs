//! Application layer errors

use thiserror::Error;

/// Problems with the credentials a call context carries
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CredentialsError {
    #[error("call context has no {0}")]
    Missing(&'static str),

    #[error("invalid mattermost_site_url {url:?}: {reason}")]
    InvalidSiteUrl { url: String, reason: String },
}

/// Key-value store errors
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Store rejected request with status {status}: {message}")]
    Rejected { status: u16, message: String },

    #[error("Missing credentials: {0}")]
    Credentials(#[from] CredentialsError),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Bot messaging errors
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Platform rejected request with status {status}: {message}")]
    Rejected { status: u16, message: String },

    #[error("Missing credentials: {0}")]
    Credentials(#[from] CredentialsError),

    #[error("Parse error: {0}")]
    Parse(String),
}

/// Errors a command can end with. Each maps to a user-facing message.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid scope: {0}")]
    InvalidScope(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Failed to {action} welcome message: {source}")]
    Failure {
        action: &'static str,
        #[source]
        source: StoreError,
    },
}

impl AppError {
    pub fn missing_field(field: &str) -> Self {
        AppError::InvalidRequest(format!("Missing required field: {}", field))
    }

    pub fn failure(action: &'static str) -> impl FnOnce(StoreError) -> Self {
        move |source| AppError::Failure { action, source }
    }

    /// Text shown to the end user. Store details never leak past this point.
    pub fn user_message(&self) -> String {
        match self {
            AppError::InvalidScope(msg) | AppError::InvalidRequest(msg) => msg.clone(),
            AppError::Failure { action, .. } => {
                format!("We couldn't {} the welcome message. Please try again.", action)
            }
        }
    }
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

/// Process-level errors
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_message_does_not_leak_store_details() {
        let err = AppError::failure("set")(StoreError::Rejected {
            status: 500,
            message: "database is on fire".into(),
        });
        let text = err.user_message();
        assert_eq!(text, "We couldn't set the welcome message. Please try again.");
        assert!(!text.contains("fire"));
        assert!(err.to_string().contains("fire"));
    }

    #[test]
    fn missing_field_names_the_field() {
        let err = AppError::missing_field("message");
        assert_eq!(err.user_message(), "Missing required field: message");
    }
}
