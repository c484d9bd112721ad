use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseType {
    Ok,
    Error,
}

/// Response returned to the platform for every call
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CallResponse {
    #[serde(rename = "type")]
    pub response_type: ResponseType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl CallResponse {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            response_type: ResponseType::Ok,
            text: Some(text.into()),
            data: None,
        }
    }

    pub fn data(data: serde_json::Value) -> Self {
        Self {
            response_type: ResponseType::Ok,
            text: None,
            data: Some(data),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            response_type: ResponseType::Error,
            text: Some(text.into()),
            data: None,
        }
    }
}
