use axum::response::{IntoResponse, Response};
use http::StatusCode;
use parley_core::HttpError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SttError>;

/// Speech-to-text errors
#[derive(Debug, Error)]
pub enum SttError {
    /// Request body was empty
    #[error("No audio received")]
    NoAudio,

    /// Request body exceeded the upload limit
    #[error("request body is too large, limit is {limit} bytes")]
    PayloadTooLarge { limit: usize },

    /// Request body could not be read
    #[error("failed to read request body: {0}")]
    BodyRead(String),

    /// Provider API returned an error status
    #[error("provider API error ({status}): {message}")]
    ProviderApiError { status: u16, message: String },

    /// Network, timeout or connection error
    #[error("connection error: {0}")]
    ConnectionError(String),

    /// Provider answered with a body we could not interpret
    #[error("invalid provider response: {0}")]
    InvalidResponse(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    ConfigError(String),
}

impl HttpError for SttError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::NoAudio => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            Self::ProviderApiError { .. } | Self::ConnectionError(_) | Self::InvalidResponse(_) => {
                StatusCode::BAD_GATEWAY
            }
            Self::BodyRead(_) | Self::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn client_message(&self) -> String {
        match self {
            Self::NoAudio => self.to_string(),
            other => format!("STT failed: {other}"),
        }
    }
}

impl IntoResponse for SttError {
    fn into_response(self) -> Response {
        parley_core::error_response(&self)
    }
}
