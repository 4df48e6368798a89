//! Application configuration management.
//!
//! The only required external input is the backend base URL, supplied
//! through the `FITLINK_API_URL` environment variable (with `.env`
//! support) or a JSON config file under the user config directory.
//! An absent base URL is deliberately not an error: requests are then
//! attempted against the bare path and fail at the transport layer.

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Application name used for config directory paths
const APP_NAME: &str = "fitlink";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Environment variable overriding the configured base URL
const BASE_URL_ENV: &str = "FITLINK_API_URL";

/// Whether a login without a token still counts as authenticated.
///
/// Some backend deployments issue no token on login. With `Required`
/// (the default) the session store refuses such logins; with `Optional`
/// user presence alone authenticates, and any token that was issued is
/// still stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenPolicy {
    #[default]
    Required,
    Optional,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub base_url: Option<String>,
    #[serde(default)]
    pub token_policy: TokenPolicy,
}

impl Config {
    /// Load the config file, then apply environment overrides.
    pub fn load() -> Result<Self> {
        let mut config = Self::load_file()?;

        // Pick up a .env file if present (silently ignore if not found)
        let _ = dotenvy::dotenv();
        if let Ok(url) = std::env::var(BASE_URL_ENV) {
            if !url.is_empty() {
                config.base_url = Some(url);
            }
        }

        Ok(config)
    }

    fn load_file() -> Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            Ok(serde_json::from_str(&contents)?)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_requires_token() {
        let config = Config::default();
        assert!(config.base_url.is_none());
        assert_eq!(config.token_policy, TokenPolicy::Required);
    }

    #[test]
    fn test_config_parses_with_missing_policy() {
        let config: Config =
            serde_json::from_str(r#"{"base_url": "https://api.fitlink.test"}"#)
                .expect("config should parse");
        assert_eq!(config.base_url.as_deref(), Some("https://api.fitlink.test"));
        assert_eq!(config.token_policy, TokenPolicy::Required);
    }

    #[test]
    fn test_token_policy_wire_format() {
        let config: Config =
            serde_json::from_str(r#"{"base_url": null, "token_policy": "optional"}"#)
                .expect("config should parse");
        assert_eq!(config.token_policy, TokenPolicy::Optional);
    }
}
