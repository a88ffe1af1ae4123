use axum::response::{IntoResponse, Response};
use http::StatusCode;
use parley_core::HttpError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TtsError>;

/// Text-to-speech and voice catalog errors
#[derive(Debug, Error)]
pub enum TtsError {
    /// Provider API returned a non-200 status
    #[error("provider API error ({status}): {message}")]
    ProviderApiError { status: u16, message: String },

    /// Provider answered 200 without any audio
    #[error("provider returned an empty body")]
    EmptyAudio,

    /// Network, timeout or connection error
    #[error("connection error: {0}")]
    ConnectionError(String),

    /// Provider answered with a body we could not interpret
    #[error("invalid provider response: {0}")]
    InvalidResponse(String),

    /// Fallback clip could not be encoded
    #[error("fallback audio error: {0}")]
    FallbackAudio(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    ConfigError(String),
}

impl HttpError for TtsError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::ProviderApiError { .. } | Self::EmptyAudio | Self::ConnectionError(_) => StatusCode::BAD_GATEWAY,
            Self::InvalidResponse(_) | Self::FallbackAudio(_) | Self::ConfigError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn client_message(&self) -> String {
        format!("Failed to list voices: {self}")
    }
}

impl IntoResponse for TtsError {
    fn into_response(self) -> Response {
        parley_core::error_response(&self)
    }
}
