//! Mock Watson speech backend for integration tests
//!
//! One server answers recognize, synthesize and voice listing calls, with a
//! per-endpoint status override to simulate outages.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing};
use serde_json::json;
use tokio_util::sync::CancellationToken;

/// Audio returned by a healthy synthesize call
pub const MOCK_AUDIO: &[u8] = b"RIFF\x2c\x00\x00\x00WAVEmock-provider-audio";

/// Status overrides per endpoint, `None` answers normally
#[derive(Default, Clone)]
pub struct WatsonBehavior {
    pub recognize_status: Option<u16>,
    pub synthesize_status: Option<u16>,
    pub voices_status: Option<u16>,
    /// Answer synthesize with 200 and no body
    pub empty_audio: bool,
}

/// A synthesize call as seen by the mock
#[derive(Debug, Clone)]
pub struct SynthesizeCall {
    pub query: HashMap<String, String>,
    pub accept: Option<String>,
    pub text: Option<String>,
}

pub struct MockWatson {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockWatsonState>,
}

struct MockWatsonState {
    behavior: WatsonBehavior,
    recognize_count: AtomicU32,
    voices_count: AtomicU32,
    synthesize_calls: Mutex<Vec<SynthesizeCall>>,
}

impl MockWatson {
    /// Start a healthy mock
    pub async fn start() -> anyhow::Result<Self> {
        Self::start_with(WatsonBehavior::default()).await
    }

    pub async fn start_with(behavior: WatsonBehavior) -> anyhow::Result<Self> {
        let state = Arc::new(MockWatsonState {
            behavior,
            recognize_count: AtomicU32::new(0),
            voices_count: AtomicU32::new(0),
            synthesize_calls: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/v1/recognize", routing::post(handle_recognize))
            .route("/v1/synthesize", routing::post(handle_synthesize))
            .route("/v1/voices", routing::get(handle_voices))
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

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn recognize_count(&self) -> u32 {
        self.state.recognize_count.load(Ordering::Relaxed)
    }

    pub fn voices_count(&self) -> u32 {
        self.state.voices_count.load(Ordering::Relaxed)
    }

    pub fn synthesize_calls(&self) -> Vec<SynthesizeCall> {
        self.state.synthesize_calls.lock().unwrap().clone()
    }
}

impl Drop for MockWatson {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

fn failure(status: u16) -> Response {
    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        Json(json!({"code": status.as_u16(), "error": "mock outage"})),
    )
        .into_response()
}

async fn handle_recognize(State(state): State<Arc<MockWatsonState>>, body: Bytes) -> Response {
    state.recognize_count.fetch_add(1, Ordering::Relaxed);

    if let Some(status) = state.behavior.recognize_status {
        return failure(status);
    }

    Json(json!({
        "result_index": 0,
        "results": [
            {"final": true, "alternatives": [{"transcript": "hello there ", "confidence": 0.94}]},
            {"final": true, "alternatives": [{"transcript": format!("{} bytes ", body.len())}]}
        ]
    }))
    .into_response()
}

async fn handle_synthesize(
    State(state): State<Arc<MockWatsonState>>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let text = serde_json::from_slice::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| v["text"].as_str().map(str::to_owned));

    state.synthesize_calls.lock().unwrap().push(SynthesizeCall {
        query,
        accept: headers
            .get(header::ACCEPT)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned),
        text,
    });

    if let Some(status) = state.behavior.synthesize_status {
        return failure(status);
    }

    if state.behavior.empty_audio {
        return StatusCode::OK.into_response();
    }

    ([(header::CONTENT_TYPE, "audio/wav")], MOCK_AUDIO).into_response()
}

async fn handle_voices(State(state): State<Arc<MockWatsonState>>) -> Response {
    state.voices_count.fetch_add(1, Ordering::Relaxed);

    if let Some(status) = state.behavior.voices_status {
        return failure(status);
    }

    Json(json!({
        "voices": [
            {
                "name": "en-US_MichaelV3Voice",
                "language": "en-US",
                "gender": "male",
                "description": "Michael: American English male voice.",
                "customizable": true
            },
            {
                "name": "en-GB_KateV3Voice",
                "language": "en-GB",
                "gender": "female",
                "description": "Kate: British English female voice."
            },
            {
                "name": "de-DE_BirgitV3Voice",
                "language": "de-DE",
                "gender": "female"
            }
        ]
    }))
    .into_response()
}
