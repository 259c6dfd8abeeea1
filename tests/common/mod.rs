#![allow(dead_code)]

use std::time::Duration;

use neuralex::{EmbeddingDatum, EmbeddingRequest, EmbeddingResponse, Usage};
use serde_json::json;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

pub const TEST_API_KEY: &str = "nlx_test_key";
pub const DIMENSIONS: usize = 4;

/// Answers an embed request with one datum per input, in input order.
///
/// Each vector is filled with the input's position so tests can check
/// ordering. Items that carry their own embedding get it echoed back.
pub struct EchoEmbeddings {
    pub delay: Option<Duration>,
}

impl Respond for EchoEmbeddings {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let parsed: EmbeddingRequest = match serde_json::from_slice(&request.body) {
            Ok(parsed) => parsed,
            Err(e) => {
                return ResponseTemplate::new(400).set_body_json(json!({
                    "error": "invalid_request",
                    "message": format!("could not parse body: {}", e),
                    "statusCode": 400
                }))
            }
        };

        let payload: Vec<EmbeddingDatum> = parsed
            .inputs
            .iter()
            .enumerate()
            .map(|(i, item)| EmbeddingDatum {
                text: item.text.clone(),
                embedding: item
                    .embedding
                    .clone()
                    .unwrap_or_else(|| vec![i as f32; DIMENSIONS]),
                usage: Usage {
                    total_tokens: item.text.split_whitespace().count() as u64,
                },
            })
            .collect();
        let total_tokens = payload.iter().map(|d| d.usage.total_tokens).sum();

        let response = EmbeddingResponse {
            payload,
            model: parsed.model,
            total_usage: Usage { total_tokens },
        };

        let template = ResponseTemplate::new(200).set_body_json(response);
        match self.delay {
            Some(delay) => template.set_delay(delay),
            None => template,
        }
    }
}

pub async fn mount_echo(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/api/v1/embed"))
        .and(header("X-API-Key", TEST_API_KEY))
        .respond_with(EchoEmbeddings { delay: None })
        .mount(server)
        .await;
}

pub async fn mount_delayed_echo(server: &MockServer, delay: Duration) {
    Mock::given(method("POST"))
        .and(path("/api/v1/embed"))
        .respond_with(EchoEmbeddings { delay: Some(delay) })
        .mount(server)
        .await;
}

pub async fn mount_status(server: &MockServer, status: u16, body: serde_json::Value) {
    Mock::given(method("POST"))
        .and(path("/api/v1/embed"))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(server)
        .await;
}

pub async fn mount_raw(server: &MockServer, status: u16, body: &str) {
    Mock::given(method("POST"))
        .and(path("/api/v1/embed"))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(server)
        .await;
}

pub fn error_body(status: u16, error: &str, message: &str) -> serde_json::Value {
    json!({
        "error": error,
        "message": message,
        "statusCode": status
    })
}

/// JSON bodies of every embed request the server has seen.
pub async fn received_bodies(server: &MockServer) -> Vec<serde_json::Value> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(|request| serde_json::from_slice(&request.body).expect("request body is JSON"))
        .collect()
}

pub fn texts(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("text number {}", i)).collect()
}

/// Plain TCP server that answers the first request with `200 OK` headers and
/// the start of a JSON body, then stops writing for `stall`.
///
/// Returns the base URL to point a client at.
pub async fn start_stalled_body_server(stall: Duration) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind local listener");
    let addr = listener.local_addr().expect("listener address");

    tokio::spawn(async move {
        if let Ok((mut socket, _)) = listener.accept().await {
            let mut buf = vec![0u8; 16 * 1024];
            let _ = socket.read(&mut buf).await;
            let head = "HTTP/1.1 200 OK\r\n\
                        Content-Type: application/json\r\n\
                        Content-Length: 1000\r\n\r\n\
                        {\"payload\":[";
            let _ = socket.write_all(head.as_bytes()).await;
            let _ = socket.flush().await;
            tokio::time::sleep(stall).await;
        }
    });

    format!("http://{}", addr)
}
