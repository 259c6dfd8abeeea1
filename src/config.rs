use std::env;
use std::fmt;
use std::time::Duration;

use crate::constants::*;
use crate::errors::ClientError;
use crate::utils::mask_api_key;

/// Connection settings shared by the async and blocking clients.
#[derive(Clone, PartialEq)]
pub struct ClientConfig {
    /// Must start with `nlx_`.
    pub api_key: String,
    /// Protocol and host, without the endpoint path.
    pub base_url: String,
    /// Applied to every request; aborts the in-flight call when exceeded.
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        ClientConfig {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_timeout_ms(self, timeout_ms: u64) -> Self {
        self.with_timeout(Duration::from_millis(timeout_ms))
    }

    /// Build a config from `NEURALEX_API_KEY`, `NEURALEX_BASE_URL` and
    /// `NEURALEX_TIMEOUT_MS`. Only the key is required.
    pub fn from_env() -> Result<Self, ClientError> {
        let api_key = env::var(API_KEY_ENV_VAR)
            .ok()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                ClientError::Authentication(format!(
                    "API key not provided and no environment variable `{}` found",
                    API_KEY_ENV_VAR
                ))
            })?;

        let mut config = ClientConfig::new(api_key);

        if let Ok(base_url) = env::var(BASE_URL_ENV_VAR) {
            if !base_url.is_empty() {
                config.base_url = base_url;
            }
        }

        if let Ok(raw_timeout) = env::var(TIMEOUT_MS_ENV_VAR) {
            let timeout_ms = raw_timeout.trim().parse::<u64>().map_err(|e| {
                ClientError::InvalidInput(format!(
                    "`{}` must be a number of milliseconds, got '{}': {}",
                    TIMEOUT_MS_ENV_VAR, raw_timeout, e
                ))
            })?;
            config.timeout = Duration::from_millis(timeout_ms);
        }

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ClientError> {
        Self::validate_api_key(&self.api_key)?;
        if self.timeout.is_zero() {
            return Err(ClientError::InvalidInput(
                "timeout must be greater than 0 ms".to_string(),
            ));
        }
        if self.base_url.trim().is_empty() {
            return Err(ClientError::InvalidInput(
                "base_url must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_api_key(api_key: &str) -> Result<(), ClientError> {
        if api_key.is_empty() {
            return Err(ClientError::Authentication(
                "API key is required".to_string(),
            ));
        }
        if !api_key.starts_with(API_KEY_PREFIX) {
            return Err(ClientError::Authentication(format!(
                "Invalid API key format: key must start with '{}'",
                API_KEY_PREFIX
            )));
        }
        Ok(())
    }

    /// Full URL of the embed endpoint.
    pub(crate) fn embed_url(&self) -> String {
        crate::utils::join_url(&self.base_url, EMBED_PATH)
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &mask_api_key(&self.api_key))
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}
