//! App manifest served to the platform at install time

use serde::{Deserialize, Serialize};

use crate::application::services::binding_catalog::APP_ICON;
use crate::infrastructure::config::Config;

pub const APP_ID: &str = "welcome-bot";
pub const APP_VERSION: &str = "v0.1.0";
pub const DISPLAY_NAME: &str = "Welcome Bot";
pub const HOMEPAGE_URL: &str = "https://github.com/mattermost/mattermost-app-welcomebot";

/// App metadata
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Manifest {
    /// Unique across all apps on the platform
    pub app_id: String,

    pub version: String,

    pub display_name: String,

    /// Bot account icon, also used by bindings and forms
    pub icon: String,

    /// Required for the app to be installable
    pub homepage_url: String,

    pub requested_permissions: Vec<Permission>,

    pub requested_locations: Vec<Location>,

    /// HTTP deployment; the only one supported
    pub http: HttpDeploy,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct HttpDeploy {
    pub root_url: String,
}

impl Manifest {
    pub fn new(config: &Config) -> Self {
        Self {
            app_id: APP_ID.to_string(),
            version: APP_VERSION.to_string(),
            display_name: DISPLAY_NAME.to_string(),
            icon: APP_ICON.to_string(),
            homepage_url: HOMEPAGE_URL.to_string(),
            requested_permissions: vec![Permission::ActAsBot, Permission::ActAsUser],
            requested_locations: vec![Location::ChannelHeader, Location::Command],
            http: HttpDeploy {
                root_url: config.root_url.clone(),
            },
        }
    }
}

/// Permission types the app requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    /// Post and use the KV store as the app's bot
    ActAsBot,
    ActAsUser,
}

/// UI locations the app may bind to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Location {
    #[serde(rename = "/channel_header")]
    ChannelHeader,
    #[serde(rename = "/command")]
    Command,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_platform_field_names() {
        let config = Config {
            root_url: "https://bot.example.com".into(),
            ..Config::default()
        };
        let json = serde_json::to_value(Manifest::new(&config)).unwrap();

        assert_eq!(json["app_id"], "welcome-bot");
        assert_eq!(json["version"], "v0.1.0");
        assert_eq!(json["http"]["root_url"], "https://bot.example.com");
        assert_eq!(
            json["requested_permissions"],
            serde_json::json!(["act_as_bot", "act_as_user"])
        );
        assert_eq!(
            json["requested_locations"],
            serde_json::json!(["/channel_header", "/command"])
        );
    }

    #[test]
    fn command_location_matches_bindings() {
        use crate::application::services::binding_catalog::COMMAND_LOCATION;

        assert_eq!(serde_json::to_value(Location::Command).unwrap(), COMMAND_LOCATION);
    }
}
