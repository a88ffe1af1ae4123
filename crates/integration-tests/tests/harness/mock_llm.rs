//! Mock completion backend for integration tests
//!
//! Serves both `/v1/chat/completions` and the legacy `/v1/completions` shape.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing};
use serde_json::{Value, json};
use tokio_util::sync::CancellationToken;

/// Default reply content of the mock
pub const MOCK_REPLY: &str = "Hello from the mock assistant.";

/// Mock completion backend that returns predictable responses
pub struct MockLlm {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockLlmState>,
}

struct MockLlmState {
    chat_count: AtomicU32,
    legacy_count: AtomicU32,
    /// Answer every request with this status instead of a completion
    fail_status: Option<StatusCode>,
    response_content: String,
    last_request: Mutex<Option<Value>>,
}

impl MockLlm {
    /// Start the mock server, returning immediately
    pub async fn start() -> anyhow::Result<Self> {
        Self::start_inner(None, MOCK_REPLY.to_owned()).await
    }

    /// Start a mock server that answers every request with `status`
    pub async fn start_failing(status: u16) -> anyhow::Result<Self> {
        Self::start_inner(Some(StatusCode::from_u16(status)?), String::new()).await
    }

    /// Start a mock server with a custom response content
    pub async fn start_with_response(content: &str) -> anyhow::Result<Self> {
        Self::start_inner(None, content.to_owned()).await
    }

    async fn start_inner(fail_status: Option<StatusCode>, response_content: String) -> anyhow::Result<Self> {
        let state = Arc::new(MockLlmState {
            chat_count: AtomicU32::new(0),
            legacy_count: AtomicU32::new(0),
            fail_status,
            response_content,
            last_request: Mutex::new(None),
        });

        let app = Router::new()
            .route("/v1/chat/completions", routing::post(handle_chat))
            .route("/v1/completions", routing::post(handle_legacy))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, state })
    }

    /// Base URL for configuring the mock as the provider
    ///
    /// Includes `/v1` since the adapters append `/chat/completions` or `/completions`
    pub fn base_url(&self) -> String {
        format!("http://{}/v1", self.addr)
    }

    /// Number of chat completion requests received
    pub fn chat_count(&self) -> u32 {
        self.state.chat_count.load(Ordering::Relaxed)
    }

    /// Number of legacy completion requests received
    pub fn legacy_count(&self) -> u32 {
        self.state.legacy_count.load(Ordering::Relaxed)
    }

    /// Body of the most recent request
    pub fn last_request(&self) -> Option<Value> {
        self.state.last_request.lock().unwrap().clone()
    }
}

impl Drop for MockLlm {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

fn record(state: &MockLlmState, body: Value) -> Option<Response> {
    *state.last_request.lock().unwrap() = Some(body);

    state.fail_status.map(|status| {
        (
            status,
            Json(json!({"error": {"message": "mock failure", "type": "server_error"}})),
        )
            .into_response()
    })
}

async fn handle_chat(State(state): State<Arc<MockLlmState>>, Json(body): Json<Value>) -> Response {
    state.chat_count.fetch_add(1, Ordering::Relaxed);

    let model = body["model"].as_str().unwrap_or("mock").to_owned();
    if let Some(failure) = record(&state, body) {
        return failure;
    }

    Json(json!({
        "id": "chatcmpl-mock",
        "object": "chat.completion",
        "created": 1_700_000_000,
        "model": model,
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": format!("  {}\n", state.response_content)},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 30, "completion_tokens": 8, "total_tokens": 38}
    }))
    .into_response()
}

async fn handle_legacy(State(state): State<Arc<MockLlmState>>, Json(body): Json<Value>) -> Response {
    state.legacy_count.fetch_add(1, Ordering::Relaxed);

    let model = body["model"].as_str().unwrap_or("mock").to_owned();
    if let Some(failure) = record(&state, body) {
        return failure;
    }

    Json(json!({
        "id": "cmpl-mock",
        "object": "text_completion",
        "created": 1_700_000_000,
        "model": model,
        "choices": [{
            "text": format!("\n\n{}", state.response_content),
            "index": 0,
            "logprobs": null,
            "finish_reason": "stop"
        }]
    }))
    .into_response()
}
