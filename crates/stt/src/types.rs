use serde::{Deserialize, Serialize};

/// Audio uploaded by the browser
#[derive(Debug)]
pub struct TranscriptionRequest {
    /// Raw audio data, encoding left to the provider to detect
    pub audio: Vec<u8>,
    /// `Content-Type` sent by the client, forwarded upstream when present
    pub content_type: Option<String>,
}

/// Response body of `POST /speech-to-text`
#[derive(Debug, Serialize, Deserialize)]
pub struct TranscriptionResponse {
    /// Recognized text, empty when nothing was recognized
    pub text: String,
}
