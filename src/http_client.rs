use std::time::Instant;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::constants::API_KEY_HEADER;
use crate::errors::ClientError;
use crate::http::{EmbeddingRequest, EmbeddingResponse};

pub(crate) const USER_AGENT: &str = concat!("neuralex-rust/", env!("CARGO_PKG_VERSION"));

/// Headers sent on every request: the API key, marked sensitive so it never
/// shows up in reqwest's own debug output.
pub(crate) fn default_headers(api_key: &str) -> Result<HeaderMap, ClientError> {
    let mut key_value = HeaderValue::from_str(api_key).map_err(|e| {
        ClientError::Authentication(format!("API key is not a valid header value: {}", e))
    })?;
    key_value.set_sensitive(true);

    let key_name = HeaderName::from_bytes(API_KEY_HEADER.as_bytes())
        .map_err(|e| ClientError::InvalidInput(format!("Invalid header name: {}", e)))?;

    let mut headers = HeaderMap::new();
    headers.insert(key_name, key_value);
    Ok(headers)
}

pub(crate) async fn send_embed_request(
    client: &reqwest::Client,
    url: &str,
    payload: &EmbeddingRequest,
) -> Result<EmbeddingResponse, ClientError> {
    tracing::debug!(
        "Sending embed request url={} inputs={} model={}",
        url,
        payload.inputs.len(),
        payload.model
    );
    let request_time_start = Instant::now();

    let response = client.post(url).json(payload).send().await?;
    let successful_response = ensure_successful_response(response).await?;
    let status = successful_response.status();

    // Read the body first so a timeout while streaming it stays a timeout.
    let body = successful_response.bytes().await?;
    let response_data = parse_embedding_response(&body)?;

    tracing::debug!(
        "Embed request completed status={} elapsed={:?}",
        status,
        request_time_start.elapsed()
    );
    check_payload_length(payload, &response_data);
    Ok(response_data)
}

async fn ensure_successful_response(
    response: reqwest::Response,
) -> Result<reqwest::Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let error_text = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    Err(status_error(status, error_text))
}

pub(crate) fn send_embed_request_blocking(
    client: &reqwest::blocking::Client,
    url: &str,
    payload: &EmbeddingRequest,
) -> Result<EmbeddingResponse, ClientError> {
    tracing::debug!(
        "Sending blocking embed request url={} inputs={} model={}",
        url,
        payload.inputs.len(),
        payload.model
    );
    let request_time_start = Instant::now();

    let response = client.post(url).json(payload).send()?;
    let status = response.status();
    if !status.is_success() {
        let error_text = response
            .text()
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(status_error(status, error_text));
    }

    let body = response.bytes()?;
    let response_data = parse_embedding_response(&body)?;

    tracing::debug!(
        "Blocking embed request completed status={} elapsed={:?}",
        status,
        request_time_start.elapsed()
    );
    check_payload_length(payload, &response_data);
    Ok(response_data)
}

fn parse_embedding_response(body: &[u8]) -> Result<EmbeddingResponse, ClientError> {
    serde_json::from_slice::<EmbeddingResponse>(body)
        .map_err(|e| ClientError::Serialization(format!("Failed to parse response JSON: {}", e)))
}

fn status_error(status: reqwest::StatusCode, error_text: String) -> ClientError {
    let err = ClientError::from_status(status.as_u16(), error_text);
    tracing::warn!("Embed request failed with status {}: {}", status, err);
    err
}

/// The server answers one datum per input, in order. The response is returned
/// as-is either way.
fn check_payload_length(payload: &EmbeddingRequest, response: &EmbeddingResponse) {
    if response.payload.len() != payload.inputs.len() {
        tracing::warn!(
            "Embed response has {} items for {} inputs",
            response.payload.len(),
            payload.inputs.len()
        );
    }
}
