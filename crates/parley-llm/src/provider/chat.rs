//! `/chat/completions` adapter

use async_trait::async_trait;

use super::{Endpoint, ReplyProvider};
use crate::error::LlmError;
use crate::protocol::{ChatMessage, ChatRequest, ChatResponse};
use crate::types::{Completion, CompletionRequest};

/// Chat completions provider, reply read from `choices[0].message.content`
pub struct ChatCompletionsProvider {
    endpoint: Endpoint,
}

impl ChatCompletionsProvider {
    pub(crate) const fn new(endpoint: Endpoint) -> Self {
        Self { endpoint }
    }
}

impl<'a> From<&CompletionRequest<'a>> for ChatRequest<'a> {
    fn from(request: &CompletionRequest<'a>) -> Self {
        Self {
            model: request.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: request.system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: request.user_message,
                },
            ],
            max_tokens: request.max_tokens,
        }
    }
}

impl TryFrom<ChatResponse> for Completion {
    type Error = LlmError;

    fn try_from(response: ChatResponse) -> Result<Self, Self::Error> {
        let choice = response.choices.into_iter().next().ok_or(LlmError::EmptyChoices)?;

        Ok(Self {
            text: choice.message.content.unwrap_or_default(),
            model: response.model,
            finish_reason: choice.finish_reason,
        })
    }
}

#[async_trait]
impl ReplyProvider for ChatCompletionsProvider {
    fn name(&self) -> &str {
        "chat"
    }

    async fn complete(&self, request: &CompletionRequest<'_>) -> Result<Completion, LlmError> {
        let wire_request = ChatRequest::from(request);
        let wire_response: ChatResponse = self
            .endpoint
            .post_json(self.name(), "chat/completions", &wire_request)
            .await?;

        wire_response.try_into()
    }
}
