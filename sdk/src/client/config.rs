//! Client configuration.
//!
//! Provides configuration options for the EDUZEN HTTP client.

use std::env;
use std::fmt;
use std::time::Duration;

use super::error::ClientError;

/// Default base URL for the API.
pub const DEFAULT_BASE_URL: &str = "https://app.eduzen.com/api";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable holding the base URL.
pub const ENV_BASE_URL: &str = "EDUZEN_BASE_URL";

/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "EDUZEN_API_KEY";

/// Environment variable holding the access token.
pub const ENV_ACCESS_TOKEN: &str = "EDUZEN_ACCESS_TOKEN";

/// Environment variable holding the timeout in seconds.
pub const ENV_TIMEOUT_SECS: &str = "EDUZEN_TIMEOUT_SECS";

/// Client configuration.
///
/// Credentials are optional and independent: when both an API key and an
/// access token are set, both are sent and the server decides which wins.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL for the API, without a trailing slash once normalized.
    pub base_url: String,

    /// Request timeout, applied to every request.
    pub timeout: Duration,

    /// Optional API key, sent as `X-API-Key`.
    pub api_key: Option<String>,

    /// Optional access token, sent as the `sb-access-token` cookie.
    pub access_token: Option<String>,

    /// User agent string.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            api_key: None,
            access_token: None,
            user_agent: format!("eduzen-sdk/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field(
                "access_token",
                &self.access_token.as_ref().map(|_| "<redacted>"),
            )
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl ClientConfig {
    /// Creates a new configuration with the given base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Builds a configuration from the `EDUZEN_*` environment variables.
    ///
    /// See [`ClientConfig::from_lookup`] for how the values are read.
    ///
    /// # Errors
    ///
    /// Returns an error if `EDUZEN_TIMEOUT_SECS` is not a whole number.
    pub fn from_env() -> Result<Self, ClientError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a configuration from `EDUZEN_*` values returned by `lookup`.
    ///
    /// Unset or empty variables fall back to the defaults, so an empty
    /// credential is the same as no credential.
    ///
    /// # Errors
    ///
    /// Returns an error if `EDUZEN_TIMEOUT_SECS` is not a whole number.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ClientError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let mut config = match var(ENV_BASE_URL) {
            Some(url) => Self::new(url),
            None => Self::default(),
        };

        if let Some(api_key) = var(ENV_API_KEY) {
            config = config.with_api_key(api_key);
        }
        if let Some(token) = var(ENV_ACCESS_TOKEN) {
            config = config.with_access_token(token);
        }
        if let Some(raw) = var(ENV_TIMEOUT_SECS) {
            let secs: u64 = raw.parse().map_err(|_| {
                ClientError::InvalidConfig(format!(
                    "{} must be a whole number of seconds, got {:?}",
                    ENV_TIMEOUT_SECS, raw
                ))
            })?;
            config = config.with_timeout(Duration::from_secs(secs));
        }

        Ok(config)
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the API key.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Sets the access token.
    #[must_use]
    pub fn with_access_token(mut self, access_token: impl Into<String>) -> Self {
        self.access_token = Some(access_token.into());
        self
    }

    /// Sets the user agent.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Returns a copy with every trailing slash removed from the base URL.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        let trimmed_len = self.base_url.trim_end_matches('/').len();
        self.base_url.truncate(trimmed_len);
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), ClientError> {
        if self.base_url.is_empty() {
            return Err(ClientError::InvalidConfig(
                "base_url cannot be empty".to_string(),
            ));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ClientError::InvalidConfig(
                "base_url must start with http:// or https://".to_string(),
            ));
        }

        if self.timeout.is_zero() {
            return Err(ClientError::InvalidConfig(
                "timeout must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}
