use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;

use crate::config::ClientConfig;
use crate::errors::ClientError;
use crate::http::EmbeddingResponse;
use crate::http_client::{default_headers, send_embed_request, USER_AGENT};
use crate::input::EmbedInput;
use crate::options::EmbedOptions;
use crate::utils::mask_api_key;

/// Async client for the NeuraLex embedding API.
///
/// Each call to [`embed`](Self::embed) sends exactly one request: no retries,
/// no batching across calls. Cloning is cheap and clones share the connection
/// pool, so the client can be handed to concurrent tasks.
///
/// # Example
///
/// ```rust,no_run
/// use neuralex::{EmbedOptions, NeuraLexClient};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = NeuraLexClient::with_api_key("nlx_your_api_key")?;
///
/// let response = client
///     .embed("Hello, world!", EmbedOptions::new().with_semantic_weight(0.8))
///     .await?;
/// println!("{} dimensions", response.dimensions().unwrap_or(0));
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct NeuraLexClient {
    config: Arc<ClientConfig>,
    embed_url: Arc<str>,
    client: Client,
}

impl NeuraLexClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        config.validate()?;
        let client = Self::get_http_client(&config)?;
        let embed_url: Arc<str> = config.embed_url().into();

        tracing::debug!(
            "Created NeuraLex client base_url={} api_key={} timeout={:?}",
            config.base_url,
            mask_api_key(&config.api_key),
            config.timeout
        );

        Ok(NeuraLexClient {
            config: Arc::new(config),
            embed_url,
            client,
        })
    }

    /// Client with the default base URL and timeout.
    pub fn with_api_key(api_key: impl Into<String>) -> Result<Self, ClientError> {
        Self::new(ClientConfig::new(api_key))
    }

    /// Client configured from `NEURALEX_*` environment variables.
    pub fn from_env() -> Result<Self, ClientError> {
        Self::new(ClientConfig::from_env()?)
    }

    fn get_http_client(config: &ClientConfig) -> Result<Client, ClientError> {
        Client::builder()
            .default_headers(default_headers(&config.api_key)?)
            .timeout(config.timeout)
            .pool_idle_timeout(Duration::from_secs(30))
            .tcp_nodelay(true)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ClientError::Network(format!("Failed to create HTTP client: {}", e)))
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.config.timeout
    }

    /// Embed one text, one [`InputItem`](crate::InputItem), or a sequence of
    /// either (1 to 100 entries).
    ///
    /// The response is returned as parsed: one datum per input, in input
    /// order.
    pub async fn embed(
        &self,
        input: impl Into<EmbedInput>,
        options: EmbedOptions,
    ) -> Result<EmbeddingResponse, ClientError> {
        let inputs = input.into().into_items()?;
        let payload = options.into_request(inputs)?;
        send_embed_request(&self.client, &self.embed_url, &payload).await
    }

    /// [`embed`](Self::embed) with default options.
    pub async fn embed_texts(
        &self,
        input: impl Into<EmbedInput>,
    ) -> Result<EmbeddingResponse, ClientError> {
        self.embed(input, EmbedOptions::default()).await
    }
}

impl fmt::Debug for NeuraLexClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NeuraLexClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
