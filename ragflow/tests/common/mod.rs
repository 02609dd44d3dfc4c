#![allow(dead_code)]

use ragflow::{ClientConfig, RagFlowClient};
use serde_json::{json, Value};
use wiremock::matchers::header;
use wiremock::{MockBuilder, MockServer, ResponseTemplate};

pub const API_KEY: &str = "ragflow-test-key";

/// Starts a mock server and a client pointed at it.
pub async fn setup() -> (MockServer, RagFlowClient) {
    let server = MockServer::start().await;
    let client = RagFlowClient::new(ClientConfig::new(server.uri(), API_KEY))
        .expect("client for mock server");
    (server, client)
}

/// Like [`setup`], with the per-request timeout set to `timeout_ms`.
pub async fn setup_with_timeout(timeout_ms: u64) -> (MockServer, RagFlowClient) {
    let server = MockServer::start().await;
    let config = ClientConfig::new(server.uri(), API_KEY).with_timeout_ms(timeout_ms);
    let client = RagFlowClient::new(config).expect("client for mock server");
    (server, client)
}

/// Adds the bearer-header matcher every request must satisfy.
pub fn authorized(mock: MockBuilder) -> MockBuilder {
    mock.and(header("Authorization", format!("Bearer {API_KEY}").as_str()))
}

/// `200 {"code": 0, "data": data}`
pub fn ok(data: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({"code": 0, "data": data}))
}

/// `200 {"code": 0}` with no payload, as returned by update/delete endpoints.
pub fn ok_empty() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({"code": 0}))
}

pub fn api_error(code: i64, message: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({"code": code, "message": message}))
}

/// An SSE body with one `data:` line per event.
pub fn sse(events: &[Value]) -> ResponseTemplate {
    let body: String = events
        .iter()
        .map(|event| format!("data:{event}\n\n"))
        .collect();
    ResponseTemplate::new(200).set_body_raw(body.into_bytes(), "text/event-stream")
}

/// Installs a `tracing` subscriber honouring `RUST_LOG`, once per test binary.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
