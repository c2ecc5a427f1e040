use std::{env, path::Path, time::Duration};

use anyhow::{Context, Result};

pub const DEFAULT_API_URL: &str = "http://localhost:6000/api/bm-inventory/v1";
pub const API_URL_ENV: &str = "CLUSTER_API_URL";
pub const API_TOKEN_ENV: &str = "CLUSTER_API_TOKEN";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for the inventory API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub token: Option<String>,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            token: None,
            timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl AsRef<str>) -> Self {
        Self {
            base_url: sanitize_base_url(base_url.as_ref()),
            ..Self::default()
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        self.token = if token.trim().is_empty() {
            None
        } else {
            Some(token)
        };
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Explicit values win; missing ones fall back to the process environment.
    pub fn resolve(api_url: Option<&str>, token: Option<&str>) -> Self {
        Self::resolve_with(api_url, token, |key| env::var(key).ok())
    }

    pub fn resolve_with(
        api_url: Option<&str>,
        token: Option<&str>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let base_url = api_url
            .map(str::to_string)
            .or_else(|| lookup(API_URL_ENV))
            .unwrap_or_default();
        let token = token
            .map(str::to_string)
            .or_else(|| lookup(API_TOKEN_ENV))
            .unwrap_or_default();
        Self::new(base_url).with_token(token)
    }
}

/// Loads `KEY=value` pairs into the environment. Without an explicit path a
/// missing `.env` is not an error.
pub fn load_env_file(path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            dotenvy::from_path(path)
                .with_context(|| format!("failed to load env file {}", path.display()))?;
        }
        None => {
            dotenvy::dotenv().ok();
        }
    }
    Ok(())
}

pub fn sanitize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_URL.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_strips_whitespace_and_trailing_slashes() {
        assert_eq!(
            sanitize_base_url("  https://inventory.example.com/api/bm-inventory/v1///  "),
            "https://inventory.example.com/api/bm-inventory/v1"
        );
    }

    #[test]
    fn sanitize_falls_back_to_default_url() {
        assert_eq!(sanitize_base_url("   "), DEFAULT_API_URL);
    }

    #[test]
    fn explicit_values_override_environment() {
        let config = ClientConfig::resolve_with(Some("http://flag/"), Some("flag-token"), |key| {
            Some(format!("env-{key}"))
        });
        assert_eq!(config.base_url, "http://flag");
        assert_eq!(config.token.as_deref(), Some("flag-token"));
    }

    #[test]
    fn environment_fills_missing_values() {
        let config = ClientConfig::resolve_with(None, None, |key| match key {
            API_URL_ENV => Some("http://env/api/".to_string()),
            API_TOKEN_ENV => Some("secret".to_string()),
            _ => None,
        });
        assert_eq!(config.base_url, "http://env/api");
        assert_eq!(config.token.as_deref(), Some("secret"));
    }

    #[test]
    fn blank_token_is_dropped() {
        let config = ClientConfig::resolve_with(None, Some("  "), |_| None);
        assert_eq!(config.base_url, DEFAULT_API_URL);
        assert!(config.token.is_none());
    }
}
