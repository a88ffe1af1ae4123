use parley_config::{CompletionApi, LlmConfig};
use secrecy::SecretString;

use crate::{
    error::LlmError,
    provider::{Endpoint, ReplyProvider, chat::ChatCompletionsProvider, legacy::LegacyCompletionsProvider},
    types::CompletionRequest,
};

/// Reply sent back when the user said nothing usable
pub const CLARIFICATION: &str = "I didn't catch that. Could you try again?";

/// Prefix of replies produced from a provider failure
pub const PROVIDER_ERROR_PREFIX: &str = "(provider error)";

/// Environment variable consulted when `llm.api_key` is unset
const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Turns a user message into an assistant reply
///
/// Built once at startup and shared read-only across requests.
pub struct ReplyGenerator {
    provider: Box<dyn ReplyProvider>,
    model: String,
    system_prompt: String,
    max_tokens: u32,
}

impl ReplyGenerator {
    /// Build the generator for the configured completion flavour
    ///
    /// # Errors
    ///
    /// Returns an error if the configured timeout is invalid
    pub fn from_config(config: &LlmConfig) -> Result<Self, LlmError> {
        let timeout = config.timeout()?;

        let api_key = config.api_key.clone().or_else(|| {
            std::env::var(API_KEY_ENV)
                .ok()
                .filter(|key| !key.is_empty())
                .map(SecretString::from)
        });

        if api_key.is_none() {
            tracing::warn!("no LLM API key configured, replies will report a provider error");
        }

        let endpoint = Endpoint::new(config.base_url.as_ref(), api_key, timeout);

        let provider: Box<dyn ReplyProvider> = match config.api {
            CompletionApi::Chat => Box::new(ChatCompletionsProvider::new(endpoint)),
            CompletionApi::Legacy => Box::new(LegacyCompletionsProvider::new(endpoint)),
        };

        tracing::debug!("Reply generator initialized with '{}' provider, model {}", provider.name(), config.model);

        Ok(Self::with_provider(provider, config))
    }

    /// Build the generator around an explicit provider
    pub fn with_provider(provider: Box<dyn ReplyProvider>, config: &LlmConfig) -> Self {
        Self {
            provider,
            model: config.model.clone(),
            system_prompt: config.system_prompt.clone(),
            max_tokens: config.max_tokens,
        }
    }

    /// Produce a reply for `user_message`
    ///
    /// Never fails and never returns an empty string. Blank input yields
    /// [`CLARIFICATION`] without a provider call; a provider failure or a
    /// blank completion yields a reply starting with [`PROVIDER_ERROR_PREFIX`].
    pub async fn generate_reply(&self, user_message: &str) -> String {
        let user_message = user_message.trim();

        if user_message.is_empty() {
            return CLARIFICATION.to_owned();
        }

        let request = CompletionRequest {
            model: &self.model,
            system_prompt: &self.system_prompt,
            user_message,
            max_tokens: self.max_tokens,
        };

        match self.complete(&request).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(provider = self.provider.name(), error = %e, "reply generation failed");
                format!("{PROVIDER_ERROR_PREFIX} {e}")
            }
        }
    }

    /// Trimmed, non-empty completion text
    async fn complete(&self, request: &CompletionRequest<'_>) -> Result<String, LlmError> {
        let completion = self.provider.complete(request).await?;

        tracing::debug!(
            provider = self.provider.name(),
            finish_reason = completion.finish_reason.as_deref().unwrap_or("unknown"),
            "reply generated"
        );

        let text = completion.text.trim();
        if text.is_empty() {
            return Err(LlmError::EmptyCompletion);
        }

        Ok(text.to_owned())
    }
}
