/*
[INPUT]:  Explicit values, `.env` file, process environment
[OUTPUT]: Immutable client configuration with defaults applied
[POS]:    Configuration layer - client setup
[UPDATE]: When adding new configuration options or environment keys
*/

use std::time::Duration;

use tracing::debug;

use crate::auth::Credentials;
use crate::http::{Result, SwitchBotError};

/// Default SwitchBot API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.switch-bot.com";
/// Default API version path segment
pub const DEFAULT_API_VERSION: &str = "v1.1";
/// Default per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

pub const ENV_ENDPOINT: &str = "ENDPOINT";
pub const ENV_API_VERSION: &str = "API_VERSION";
pub const ENV_TOKEN: &str = "TOKEN";
pub const ENV_SECRET: &str = "SECRET";
pub const ENV_TIMEOUT: &str = "TIMEOUT";

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub endpoint: String,
    pub api_version: String,
    pub credentials: Credentials,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl ClientConfig {
    /// Create a configuration with default endpoint, version and timeouts
    pub fn new(credentials: Credentials) -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            credentials,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_connect_timeout(mut self, connect_timeout: Duration) -> Self {
        self.connect_timeout = connect_timeout;
        self
    }

    /// Load configuration from a `.env` file (if present) and the environment.
    ///
    /// `TOKEN` and `SECRET` are required; `ENDPOINT`, `API_VERSION` and
    /// `TIMEOUT` fall back to their defaults.
    pub fn from_env() -> Result<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            debug!(path = %path.display(), "loaded .env file");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let token = value(ENV_TOKEN)
            .ok_or_else(|| SwitchBotError::Config(format!("{ENV_TOKEN} is not set")))?;
        let secret = value(ENV_SECRET)
            .ok_or_else(|| SwitchBotError::Config(format!("{ENV_SECRET} is not set")))?;

        let mut config = Self::new(Credentials::new(token, secret)?);

        if let Some(endpoint) = value(ENV_ENDPOINT) {
            config.endpoint = endpoint;
        }
        if let Some(api_version) = value(ENV_API_VERSION) {
            config.api_version = api_version;
        }
        if let Some(timeout) = value(ENV_TIMEOUT) {
            let secs: u64 = timeout.trim().parse().map_err(|e| {
                SwitchBotError::Config(format!("{ENV_TIMEOUT} must be whole seconds: {e}"))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        debug!(
            endpoint = %config.endpoint,
            api_version = %config.api_version,
            timeout_secs = config.timeout.as_secs(),
            "client configuration loaded"
        );

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(pairs: &[(&str, &str)]) -> Result<ClientConfig> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ClientConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_applied() {
        let config = load(&[("TOKEN", "tok"), ("SECRET", "sec")]).unwrap();
        assert_eq!(config.endpoint, "https://api.switch-bot.com");
        assert_eq!(config.api_version, "v1.1");
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.credentials.token(), "tok");
        assert_eq!(config.credentials.secret(), "sec");
    }

    #[test]
    fn test_overrides_applied() {
        let config = load(&[
            ("TOKEN", "tok"),
            ("SECRET", "sec"),
            ("ENDPOINT", "http://localhost:8080"),
            ("API_VERSION", "v1.0"),
            ("TIMEOUT", "5"),
        ])
        .unwrap();
        assert_eq!(config.endpoint, "http://localhost:8080");
        assert_eq!(config.api_version, "v1.0");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_missing_token_fails() {
        let err = load(&[("SECRET", "sec")]).unwrap_err();
        assert!(matches!(err, SwitchBotError::Config(ref msg) if msg.contains("TOKEN")));
    }

    #[test]
    fn test_missing_secret_fails() {
        let err = load(&[("TOKEN", "tok"), ("SECRET", "")]).unwrap_err();
        assert!(matches!(err, SwitchBotError::Config(ref msg) if msg.contains("SECRET")));
    }

    #[test]
    fn test_invalid_timeout_fails() {
        let err = load(&[
            ("TOKEN", "tok"),
            ("SECRET", "sec"),
            ("TIMEOUT", "soon"),
        ])
        .unwrap_err();
        assert!(matches!(err, SwitchBotError::Config(ref msg) if msg.contains("TIMEOUT")));
    }

    #[test]
    fn test_builder_methods() {
        let credentials = Credentials::new("tok", "sec").unwrap();
        let config = ClientConfig::new(credentials)
            .with_endpoint("http://127.0.0.1:9000")
            .with_api_version("v2")
            .with_timeout(Duration::from_secs(3))
            .with_connect_timeout(Duration::from_secs(1));
        assert_eq!(config.endpoint, "http://127.0.0.1:9000");
        assert_eq!(config.api_version, "v2");
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert_eq!(config.connect_timeout, Duration::from_secs(1));
    }
}
