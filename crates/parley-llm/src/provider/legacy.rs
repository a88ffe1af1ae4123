//! `/completions` adapter for older text-completion models

use async_trait::async_trait;

use super::{Endpoint, ReplyProvider};
use crate::error::LlmError;
use crate::protocol::{LegacyRequest, LegacyResponse};
use crate::types::{Completion, CompletionRequest};

/// Text completions provider, reply read from `choices[0].text`
pub struct LegacyCompletionsProvider {
    endpoint: Endpoint,
}

impl LegacyCompletionsProvider {
    pub(crate) const fn new(endpoint: Endpoint) -> Self {
        Self { endpoint }
    }
}

/// Flatten the two turns into one prompt
fn build_prompt(system_prompt: &str, user_message: &str) -> String {
    format!("{system_prompt}\n\nUser: {user_message}\nAssistant:")
}

impl<'a> From<&CompletionRequest<'a>> for LegacyRequest<'a> {
    fn from(request: &CompletionRequest<'a>) -> Self {
        Self {
            model: request.model,
            prompt: build_prompt(request.system_prompt, request.user_message),
            max_tokens: request.max_tokens,
        }
    }
}

impl TryFrom<LegacyResponse> for Completion {
    type Error = LlmError;

    fn try_from(response: LegacyResponse) -> Result<Self, Self::Error> {
        let choice = response.choices.into_iter().next().ok_or(LlmError::EmptyChoices)?;

        Ok(Self {
            text: choice.text,
            model: response.model,
            finish_reason: choice.finish_reason,
        })
    }
}

#[async_trait]
impl ReplyProvider for LegacyCompletionsProvider {
    fn name(&self) -> &str {
        "legacy"
    }

    async fn complete(&self, request: &CompletionRequest<'_>) -> Result<Completion, LlmError> {
        let wire_request = LegacyRequest::from(request);
        let wire_response: LegacyResponse = self
            .endpoint
            .post_json(self.name(), "completions", &wire_request)
            .await?;

        wire_response.try_into()
    }
}
