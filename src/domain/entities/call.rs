//! Call requests sent by the platform to the app's command endpoints

use serde::{Deserialize, Serialize};

use super::User;

/// Kind of conversation a call was issued from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum ChannelType {
    #[serde(rename = "O")]
    Open,
    #[serde(rename = "P")]
    Private,
    #[serde(rename = "D")]
    Direct,
    #[serde(rename = "G")]
    Group,
    #[serde(other)]
    Unknown,
}

impl ChannelType {
    /// Public and private channels are the only ones that hold a welcome message
    pub fn accepts_welcome(&self) -> bool {
        matches!(self, ChannelType::Open | ChannelType::Private)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Channel {
    #[serde(default)]
    pub id: String,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub channel_type: Option<ChannelType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Team {
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl Team {
    pub fn label(&self) -> Option<&str> {
        self.display_name
            .as_deref()
            .or(self.name.as_deref())
            .filter(|s| !s.is_empty())
    }
}

/// Invocation context. The platform sends either expanded objects or bare ids
/// depending on the expand level requested by the binding.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CallContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mattermost_site_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bot_user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bot_access_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acting_user: Option<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acting_user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<Channel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<Team>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

impl CallContext {
    pub fn acting_user_id(&self) -> Option<&str> {
        non_empty(self.acting_user.as_ref().map(|u| u.id.as_str()))
            .or_else(|| non_empty(self.acting_user_id.as_deref()))
    }

    pub fn channel_id(&self) -> Option<&str> {
        non_empty(self.channel.as_ref().map(|c| c.id.as_str()))
            .or_else(|| non_empty(self.channel_id.as_deref()))
    }

    /// Only known when the channel was expanded
    pub fn channel_type(&self) -> Option<ChannelType> {
        self.channel.as_ref().and_then(|c| c.channel_type)
    }

    pub fn team_label(&self) -> Option<&str> {
        self.team.as_ref().and_then(Team::label)
    }
}

/// A submitted form value: plain text, or the selected option of a select field
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Selected {
        #[serde(default)]
        label: String,
        value: String,
    },
}

impl FieldValue {
    pub fn as_str(&self) -> &str {
        match self {
            FieldValue::Text(s) => s,
            FieldValue::Selected { value, .. } => value,
        }
    }
}

/// Values submitted through the command forms
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CallValues {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_name: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<FieldValue>,
}

impl CallValues {
    pub fn team_name(&self) -> Option<&str> {
        self.team_name
            .as_ref()
            .map(FieldValue::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Returned untrimmed; the message is stored verbatim
    pub fn message(&self) -> Option<&str> {
        self.message
            .as_ref()
            .map(FieldValue::as_str)
            .filter(|s| !s.is_empty())
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CallRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default)]
    pub values: CallValues,
    #[serde(default)]
    pub context: CallContext,
}

impl CallRequest {
    /// Decode a request body. An empty body is an empty call.
    pub fn from_body(body: &[u8]) -> Result<Self, serde_json::Error> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        serde_json::from_slice(body)
    }
}
