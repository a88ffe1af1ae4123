use std::time::Duration;

use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

/// Instruction sent as the system turn of every chat request
pub const DEFAULT_SYSTEM_PROMPT: &str = "Act like a personal assistant. You can respond to questions, translate sentences, summarize news, and give recommendations.";

/// Chat completion provider configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LlmConfig {
    /// Response shape spoken by the provider
    #[serde(default)]
    pub api: CompletionApi,
    /// API key, falls back to `OPENAI_API_KEY` when unset
    #[serde(default)]
    pub api_key: Option<SecretString>,
    /// Base URL override (`OpenAI`-compatible, including `/v1`)
    #[serde(default)]
    pub base_url: Option<Url>,
    /// Model identifier
    #[serde(default = "default_model")]
    pub model: String,
    /// Upper bound on generated tokens
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// System instruction preceding the user turn
    #[serde(default = "default_system_prompt")]
    pub system_prompt: String,
    /// Per-call timeout
    #[serde(default = "default_timeout")]
    pub timeout: String,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api: CompletionApi::default(),
            api_key: None,
            base_url: None,
            model: default_model(),
            max_tokens: default_max_tokens(),
            system_prompt: default_system_prompt(),
            timeout: default_timeout(),
        }
    }
}

impl LlmConfig {
    /// Parsed per-call timeout
    ///
    /// # Errors
    ///
    /// Returns an error if `timeout` is not a valid duration
    pub fn timeout(&self) -> anyhow::Result<Duration> {
        crate::parse_duration("llm.timeout", &self.timeout)
    }
}

/// Completion endpoint flavour
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionApi {
    /// `/chat/completions`, reply in `choices[0].message.content`
    #[default]
    Chat,
    /// `/completions`, reply in `choices[0].text`
    Legacy,
}

fn default_model() -> String {
    "gpt-3.5-turbo".to_string()
}

#[allow(clippy::missing_const_for_fn)]
fn default_max_tokens() -> u32 {
    60
}

fn default_system_prompt() -> String {
    DEFAULT_SYSTEM_PROMPT.to_string()
}

fn default_timeout() -> String {
    "30s".to_string()
}
