use serde::{Deserialize, Serialize};

/// Simplified voice descriptor served by `GET /voices`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceEntry {
    /// Provider voice id, usable as the `voice` of `/process-message`
    pub name: String,
    /// Human readable description, or the id when the provider has none
    pub label: String,
    /// Language code (e.g. `en-US`)
    pub language: String,
}
