//! Configuration management

use serde::{Deserialize, Serialize};
use crate::application::errors::ConfigError;

pub const ROOT_URL_VAR: &str = "MANIFEST_ROOT_URL";
pub const PORT_VAR: &str = "SERVER_PORT";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// Process configuration, read once at startup
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    /// Base URL the platform uses to call back into the app
    pub root_url: String,
    pub host: String,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root_url: format!("http://localhost:{}", DEFAULT_PORT),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl Config {
    pub fn load_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(value) = lookup(PORT_VAR).filter(|v| !v.trim().is_empty()) {
            let (host, port) = parse_listen(&value)?;
            if let Some(host) = host {
                config.host = host;
            }
            config.port = port;
        }

        match lookup(ROOT_URL_VAR).map(|v| v.trim().trim_end_matches('/').to_string()) {
            Some(url) if !url.is_empty() => {
                if !(url.starts_with("http://") || url.starts_with("https://")) {
                    return Err(ConfigError::InvalidValue {
                        name: ROOT_URL_VAR,
                        value: url,
                    });
                }
                config.root_url = url;
            }
            _ => {
                config.root_url = format!("http://localhost:{}", config.port);
                tracing::warn!("{} not set, using {}", ROOT_URL_VAR, config.root_url);
            }
        }

        Ok(config)
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// URL the platform installs the app from
    pub fn manifest_url(&self) -> String {
        format!("{}/manifest.json", self.root_url)
    }
}

/// Accepts `8080`, `:8080` or `host:8080`
fn parse_listen(value: &str) -> Result<(Option<String>, u16), ConfigError> {
    let value = value.trim();
    let invalid = || ConfigError::InvalidValue {
        name: PORT_VAR,
        value: value.to_string(),
    };

    let (host, port) = match value.rsplit_once(':') {
        Some((host, port)) if !host.is_empty() => (Some(host.to_string()), port),
        Some((_, port)) => (None, port),
        None => (None, value),
    };

    let port = port.parse::<u16>().map_err(|_| invalid())?;
    Ok((host, port))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = from(&[]).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.listen_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn accepts_go_style_port() {
        let config = from(&[(PORT_VAR, ":4000"), (ROOT_URL_VAR, "https://bot.example.com/")]).unwrap();
        assert_eq!(config.port, 4000);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.manifest_url(), "https://bot.example.com/manifest.json");
    }

    #[test]
    fn accepts_host_and_port() {
        let config = from(&[(PORT_VAR, "127.0.0.1:9000")]).unwrap();
        assert_eq!(config.listen_addr(), "127.0.0.1:9000");
        assert_eq!(config.root_url, "http://localhost:9000");
    }

    #[test]
    fn rejects_bad_port() {
        assert!(matches!(
            from(&[(PORT_VAR, "eighty")]),
            Err(ConfigError::InvalidValue { name: PORT_VAR, .. })
        ));
    }

    #[test]
    fn rejects_root_url_without_scheme() {
        assert!(from(&[(ROOT_URL_VAR, "bot.example.com")]).is_err());
    }
}
