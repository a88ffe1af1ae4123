use thiserror::Error;

/// Errors that can occur while asking the provider for a reply
///
/// Never surfaced as an HTTP status: the generator folds the message into
/// the reply text.
#[derive(Debug, Error)]
pub enum LlmError {
    /// No API key in configuration or environment
    #[error("no API key configured")]
    MissingApiKey,

    /// Request could not be delivered, or timed out
    #[error("upstream request failed: {0}")]
    Upstream(String),

    /// Provider answered with a non-success status
    #[error("provider returned {status}: {body}")]
    Status { status: u16, body: String },

    /// Provider answered with a body we could not interpret
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// Provider answered without any choices
    #[error("no choices in response")]
    EmptyChoices,

    /// Provider's first choice held no text
    #[error("empty completion")]
    EmptyCompletion,

    /// Unexpected internal error
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
