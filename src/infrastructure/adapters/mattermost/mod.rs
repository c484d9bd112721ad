//! Mattermost adapter
//!
//! Talks to the Apps plugin KV API and the v4 REST API with the bot access
//! token carried in each call's context.

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode, Url};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::application::errors::{BotError, CredentialsError, StoreError};
use crate::domain::entities::CallContext;
use crate::domain::traits::{Bot, KeyValueStore, Platform};

/// Path of the Apps plugin REST API, relative to the site URL
const APPS_API: [&str; 4] = ["plugins", "com.mattermost.apps", "api", "v1"];

/// REST client acting as the app's bot for one call
pub struct MattermostClient {
    client: Client,
    site_url: Url,
    token: String,
    bot_user_id: Option<String>,
}

impl MattermostClient {
    pub fn new(
        client: Client,
        site_url: &str,
        token: impl Into<String>,
    ) -> Result<Self, CredentialsError> {
        let invalid = |reason: String| CredentialsError::InvalidSiteUrl {
            url: site_url.to_string(),
            reason,
        };
        let site_url = Url::parse(site_url).map_err(|e| invalid(e.to_string()))?;
        if site_url.cannot_be_a_base() {
            return Err(invalid("not a base URL".to_string()));
        }
        Ok(Self {
            client,
            site_url,
            token: token.into(),
            bot_user_id: None,
        })
    }

    pub fn with_bot_user_id(mut self, bot_user_id: impl Into<String>) -> Self {
        self.bot_user_id = Some(bot_user_id.into());
        self
    }

    /// Build a client from the credentials in a call context
    pub fn from_context(client: Client, context: &CallContext) -> Result<Self, CredentialsError> {
        let site_url = context
            .mattermost_site_url
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or(CredentialsError::Missing("mattermost_site_url"))?;
        let token = context
            .bot_access_token
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or(CredentialsError::Missing("bot_access_token"))?;

        let mut mm = Self::new(client, site_url, token)?;
        if let Some(bot_user_id) = context.bot_user_id.as_deref().filter(|s| !s.is_empty()) {
            mm = mm.with_bot_user_id(bot_user_id);
        }
        Ok(mm)
    }

    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.site_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn kv_url(&self, prefix: &str, key: &str) -> Url {
        let mut segments: Vec<&str> = APPS_API.to_vec();
        segments.extend(["kv", prefix, key]);
        self.url(&segments)
    }

    fn api_url(&self, path: &[&str]) -> Url {
        let mut segments: Vec<&str> = vec!["api", "v4"];
        segments.extend_from_slice(path);
        self.url(&segments)
    }
}

/// Status and body of a non-success response
async fn ensure_success(response: Response) -> Result<Response, (u16, String)> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response.text().await.unwrap_or_default();
    Err((status.as_u16(), message))
}

/// Stored values are JSON encoded; an empty body or `null` means absent
fn decode_value(body: &[u8]) -> Result<Option<String>, StoreError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    match serde_json::from_slice::<serde_json::Value>(body) {
        Ok(serde_json::Value::Null) => Ok(None),
        Ok(serde_json::Value::String(s)) => Ok(Some(s)),
        Ok(other) => Ok(Some(other.to_string())),
        Err(_) => String::from_utf8(body.to_vec())
            .map(Some)
            .map_err(|e| StoreError::Serialization(e.to_string())),
    }
}

#[async_trait]
impl KeyValueStore for MattermostClient {
    async fn get(&self, prefix: &str, key: &str) -> Result<Option<String>, StoreError> {
        let response = self
            .client
            .get(self.kv_url(prefix, key))
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let response = ensure_success(response)
            .await
            .map_err(|(status, message)| StoreError::Rejected { status, message })?;

        let body = response
            .bytes()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        decode_value(&body)
    }

    async fn set(&self, prefix: &str, key: &str, value: &str) -> Result<(), StoreError> {
        let response = self
            .client
            .put(self.kv_url(prefix, key))
            .bearer_auth(&self.token)
            .json(value)
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        ensure_success(response)
            .await
            .map_err(|(status, message)| StoreError::Rejected { status, message })?;
        Ok(())
    }

    async fn delete(&self, prefix: &str, key: &str) -> Result<(), StoreError> {
        let response = self
            .client
            .delete(self.kv_url(prefix, key))
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(());
        }

        ensure_success(response)
            .await
            .map_err(|(status, message)| StoreError::Rejected { status, message })?;
        Ok(())
    }
}

#[async_trait]
impl Bot for MattermostClient {
    async fn send_direct_message(&self, user_id: &str, text: &str) -> Result<(), BotError> {
        #[derive(Deserialize)]
        struct ChannelResponse {
            id: String,
        }

        #[derive(Serialize)]
        struct CreatePost<'a> {
            channel_id: &'a str,
            message: &'a str,
        }

        let bot_user_id = self
            .bot_user_id
            .as_deref()
            .ok_or(CredentialsError::Missing("bot_user_id"))?;

        let response = self
            .client
            .post(self.api_url(&["channels", "direct"]))
            .bearer_auth(&self.token)
            .json(&[bot_user_id, user_id])
            .send()
            .await
            .map_err(|e| BotError::Network(e.to_string()))?;

        let channel: ChannelResponse = ensure_success(response)
            .await
            .map_err(|(status, message)| BotError::Rejected { status, message })?
            .json()
            .await
            .map_err(|e| BotError::Parse(e.to_string()))?;

        let response = self
            .client
            .post(self.api_url(&["posts"]))
            .bearer_auth(&self.token)
            .json(&CreatePost {
                channel_id: &channel.id,
                message: text,
            })
            .send()
            .await
            .map_err(|e| BotError::Network(e.to_string()))?;

        ensure_success(response)
            .await
            .map_err(|(status, message)| BotError::Rejected { status, message })?;

        tracing::debug!("Sent DM to {} in channel {}", user_id, channel.id);
        Ok(())
    }
}

/// Builds a [`MattermostClient`] per call, sharing one connection pool
#[derive(Clone, Default)]
pub struct MattermostPlatform {
    client: Client,
}

impl MattermostPlatform {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Platform for MattermostPlatform {
    fn store(&self, context: &CallContext) -> Result<Arc<dyn KeyValueStore>, StoreError> {
        let mm = MattermostClient::from_context(self.client.clone(), context)?;
        Ok(Arc::new(mm))
    }

    fn bot(&self, context: &CallContext) -> Result<Arc<dyn Bot>, BotError> {
        let mm = MattermostClient::from_context(self.client.clone(), context)?;
        Ok(Arc::new(mm))
    }
}
