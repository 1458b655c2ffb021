//! Service configuration
//!
//! The analysis service location is an environment concern. Defaults point at a
//! locally running backend.

use crate::error::ConfigError;
use std::time::Duration;

/// Environment variable overriding the service base URL
pub const API_URL_ENV: &str = "VERSEVIBE_API_URL";
/// Environment variable overriding the request timeout (whole seconds)
pub const TIMEOUT_ENV: &str = "VERSEVIBE_TIMEOUT_SECS";

/// Default service base URL
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Where and how to reach the analysis service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Base URL without trailing slash
    pub base_url: String,
    /// Timeout applied to every request
    pub request_timeout: Duration,
    /// User agent sent with every request
    pub user_agent: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: DEFAULT_TIMEOUT,
            user_agent: format!("VerseVibe/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ServiceConfig {
    /// Create a configuration for a specific base URL
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: normalize_base_url(&base_url.into())?,
            ..Self::default()
        })
    }

    /// Override the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Build from the process environment, falling back to defaults
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (used by `from_env` and tests)
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(API_URL_ENV) {
            config.base_url = normalize_base_url(&url)?;
        }

        if let Some(raw) = lookup(TIMEOUT_ENV) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| ConfigError::InvalidValue {
                    key: TIMEOUT_ENV.to_string(),
                    value: raw.clone(),
                })?;
            config.request_timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// Full URL for an endpoint path such as `/analyze`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ConfigError::InvalidUrl(raw.to_string()));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServiceConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:5000");
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert!(config.user_agent.starts_with("VerseVibe/"));
    }

    #[test]
    fn test_env_overrides() {
        let config = ServiceConfig::from_lookup(lookup_from(&[
            (API_URL_ENV, "https://vibe.example.com/api/"),
            (TIMEOUT_ENV, "5"),
        ]))
        .unwrap();

        assert_eq!(config.base_url, "https://vibe.example.com/api");
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(config.endpoint("/analyze"), "https://vibe.example.com/api/analyze");
    }

    #[test]
    fn test_invalid_timeout() {
        let result = ServiceConfig::from_lookup(lookup_from(&[(TIMEOUT_ENV, "soon")]));
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));

        let result = ServiceConfig::from_lookup(lookup_from(&[(TIMEOUT_ENV, "0")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_url() {
        let result = ServiceConfig::with_base_url("127.0.0.1:5000");
        assert_eq!(result, Err(ConfigError::InvalidUrl("127.0.0.1:5000".to_string())));
    }
}
