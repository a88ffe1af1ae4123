//! Wire format types for the `OpenAI`-compatible completion endpoints
//!
//! Pure serde structs used only at the HTTP boundary. Responses are
//! normalized into [`crate::Completion`] before leaving the provider.

use serde::{Deserialize, Serialize};

// -- Chat completions --

/// `POST /chat/completions` request
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
    pub max_tokens: u32,
}

/// Single conversation turn
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage<'a> {
    pub role: &'static str,
    pub content: &'a str,
}

/// `POST /chat/completions` response
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    pub message: ChatChoiceMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoiceMessage {
    /// Null when the model produced only tool calls
    #[serde(default)]
    pub content: Option<String>,
}

// -- Legacy completions --

/// `POST /completions` request
#[derive(Debug, Clone, Serialize)]
pub struct LegacyRequest<'a> {
    pub model: &'a str,
    pub prompt: String,
    pub max_tokens: u32,
}

/// `POST /completions` response
#[derive(Debug, Clone, Deserialize)]
pub struct LegacyResponse {
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub choices: Vec<LegacyChoice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LegacyChoice {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub finish_reason: Option<String>,
}
