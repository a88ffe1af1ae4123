//! `POST /process-message`: reply text plus spoken reply in one round trip

use std::sync::Arc;

use axum::{
    Json,
    body::Body,
    extract::State,
    response::{IntoResponse, Response},
};
use base64::{Engine, engine::general_purpose::STANDARD};
use http::StatusCode;
use parley_core::HttpError;
use parley_llm::ReplyGenerator;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tts::VoiceId;

/// Body limit for message requests (1 MiB)
const BODY_LIMIT_BYTES: usize = 1 << 20;

/// Shared state of the message route
#[derive(Clone)]
pub struct ProcessState {
    pub generator: Arc<ReplyGenerator>,
    pub tts: Arc<tts::Server>,
}

/// Rejections of a message request
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("Missing 'userMessage'")]
    MissingUserMessage,

    #[error("request body exceeds {limit} bytes")]
    PayloadTooLarge { limit: usize },

    #[error("failed to read request body: {0}")]
    BodyRead(String),
}

impl HttpError for ProcessError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingUserMessage => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            Self::BodyRead(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn client_message(&self) -> String {
        match self {
            Self::MissingUserMessage => self.to_string(),
            _ => format!("Processing failed: {self}"),
        }
    }
}

impl IntoResponse for ProcessError {
    fn into_response(self) -> Response {
        parley_core::error_response(&self)
    }
}

/// Validated `{userMessage, voice}` payload
#[derive(Debug, PartialEq, Eq)]
pub struct MessageRequest {
    /// Trimmed, non-empty
    pub user_message: String,
    /// Trimmed, `"default"` when absent or blank
    pub voice: String,
}

impl MessageRequest {
    /// Interpret a raw body leniently
    ///
    /// Unparseable JSON and non-objects read as `{}`. Non-string fields count
    /// as absent.
    fn from_body(body: &[u8]) -> Result<Self, ProcessError> {
        let value = serde_json::from_slice::<Value>(body).unwrap_or(Value::Null);

        let user_message = string_field(&value, "userMessage").ok_or(ProcessError::MissingUserMessage)?;
        let voice = string_field(&value, "voice").unwrap_or(VoiceId::DEFAULT);

        Ok(Self {
            user_message: user_message.to_owned(),
            voice: voice.to_owned(),
        })
    }
}

/// Trimmed, non-empty string field of a JSON object
fn string_field<'a>(value: &'a Value, name: &str) -> Option<&'a str> {
    value
        .get(name)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

impl<S> axum::extract::FromRequest<S> for MessageRequest
where
    S: Send + Sync,
{
    type Rejection = ProcessError;

    async fn from_request(request: http::Request<Body>, _state: &S) -> Result<Self, Self::Rejection> {
        let bytes = axum::body::to_bytes(request.into_body(), BODY_LIMIT_BYTES)
            .await
            .map_err(|err| {
                if std::error::Error::source(&err).is_some_and(|source| source.is::<http_body_util::LengthLimitError>())
                {
                    ProcessError::PayloadTooLarge {
                        limit: BODY_LIMIT_BYTES,
                    }
                } else {
                    tracing::error!("Failed to read message body: {err}");
                    ProcessError::BodyRead(err.to_string())
                }
            })?;

        Self::from_body(&bytes)
    }
}

/// Reply text with its spoken form
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub openai_response_text: String,
    /// Base64 WAV
    pub openai_response_speech: String,
}

/// Generate a reply for the message and synthesize it
pub async fn process_message(State(state): State<ProcessState>, request: MessageRequest) -> Json<MessageResponse> {
    tracing::debug!(
        message_len = request.user_message.len(),
        voice = %request.voice,
        "processing message"
    );

    let reply = state.generator.generate_reply(&request.user_message).await;
    let audio = state.tts.synthesize(&reply, &request.voice).await;

    Json(MessageResponse {
        openai_response_speech: STANDARD.encode(&audio),
        openai_response_text: reply,
    })
}
