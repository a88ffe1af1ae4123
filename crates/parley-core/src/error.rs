use axum::{
    Json,
    response::{IntoResponse, Response},
};
use http::StatusCode;
use serde::{Deserialize, Serialize};

/// Trait for domain errors that can be converted to HTTP responses
///
/// Implemented by each feature crate's error type. Keeps the mapping from
/// failure to status code next to the error definition while the body
/// format stays uniform across routes.
pub trait HttpError: std::error::Error {
    /// HTTP status code for this error
    fn status_code(&self) -> StatusCode;

    /// Message safe to expose to the browser
    fn client_message(&self) -> String;
}

/// JSON error body returned by every route: `{"error": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Render any [`HttpError`] as a JSON error response
pub fn error_response<E: HttpError + ?Sized>(err: &E) -> Response {
    let status = err.status_code();
    let body = ErrorBody {
        error: err.client_message(),
    };

    (status, Json(body)).into_response()
}
