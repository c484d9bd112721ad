use std::fmt;

/// Storage key under which a welcome message lives.
///
/// Messages are scoped per channel: the key is the id of the channel the
/// command was invoked from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScopeKey(String);

impl ScopeKey {
    pub fn for_channel(channel_id: impl Into<String>) -> Self {
        Self(channel_id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ScopeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The welcome text shown to users joining a channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WelcomeMessage {
    pub scope: ScopeKey,
    pub text: String,
}

impl WelcomeMessage {
    pub fn new(scope: ScopeKey, text: impl Into<String>) -> Self {
        Self {
            scope,
            text: text.into(),
        }
    }
}
