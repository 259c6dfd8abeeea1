//! Synchronous client.
//!
//! Same semantics as [`crate::NeuraLexClient`], built on
//! `reqwest::blocking`. Must not be created or dropped inside an async
//! runtime; use the async client there.

use std::fmt;
use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::ClientConfig;
use crate::errors::ClientError;
use crate::http::EmbeddingResponse;
use crate::http_client::{default_headers, send_embed_request_blocking, USER_AGENT};
use crate::input::EmbedInput;
use crate::options::EmbedOptions;
use crate::utils::mask_api_key;

#[derive(Clone)]
pub struct NeuraLexClient {
    config: ClientConfig,
    embed_url: String,
    client: Client,
}

impl NeuraLexClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        config.validate()?;
        let client = Client::builder()
            .default_headers(default_headers(&config.api_key)?)
            .timeout(config.timeout)
            .pool_idle_timeout(Duration::from_secs(30))
            .tcp_nodelay(true)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ClientError::Network(format!("Failed to create HTTP client: {}", e)))?;

        tracing::debug!(
            "Created blocking NeuraLex client base_url={} api_key={}",
            config.base_url,
            mask_api_key(&config.api_key)
        );

        Ok(NeuraLexClient {
            embed_url: config.embed_url(),
            config,
            client,
        })
    }

    pub fn with_api_key(api_key: impl Into<String>) -> Result<Self, ClientError> {
        Self::new(ClientConfig::new(api_key))
    }

    pub fn from_env() -> Result<Self, ClientError> {
        Self::new(ClientConfig::from_env()?)
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.config.timeout
    }

    pub fn embed(
        &self,
        input: impl Into<EmbedInput>,
        options: EmbedOptions,
    ) -> Result<EmbeddingResponse, ClientError> {
        let inputs = input.into().into_items()?;
        let payload = options.into_request(inputs)?;
        send_embed_request_blocking(&self.client, &self.embed_url, &payload)
    }

    pub fn embed_texts(&self, input: impl Into<EmbedInput>) -> Result<EmbeddingResponse, ClientError> {
        self.embed(input, EmbedOptions::default())
    }
}

impl fmt::Debug for NeuraLexClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("blocking::NeuraLexClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
