//! Reply provider trait and the two `OpenAI`-compatible adapters

pub mod chat;
pub mod legacy;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Serialize, de::DeserializeOwned};
use url::Url;

use crate::error::LlmError;
use crate::types::{Completion, CompletionRequest};

/// Default `OpenAI` API base URL
pub(crate) const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Trait implemented by each completion endpoint flavour
#[async_trait]
pub trait ReplyProvider: Send + Sync {
    /// Human-readable provider name
    fn name(&self) -> &str;

    /// Request a single completion
    async fn complete(&self, request: &CompletionRequest<'_>) -> Result<Completion, LlmError>;
}

/// Connection settings shared by both adapters
pub(crate) struct Endpoint {
    client: Client,
    base_url: String,
    api_key: Option<SecretString>,
    timeout: Duration,
}

impl Endpoint {
    pub fn new(base_url: Option<&Url>, api_key: Option<SecretString>, timeout: Duration) -> Self {
        let base_url = base_url
            .map_or(DEFAULT_BASE_URL, Url::as_str)
            .trim_end_matches('/')
            .to_string();

        Self {
            client: crate::http_client::http_client(),
            base_url,
            api_key,
            timeout,
        }
    }

    /// POST `body` to `{base_url}/{path}` with bearer auth and decode the reply
    pub async fn post_json<B, R>(&self, provider: &str, path: &str, body: &B) -> Result<R, LlmError>
    where
        B: Serialize + Sync,
        R: DeserializeOwned,
    {
        let api_key = self.api_key.as_ref().ok_or(LlmError::MissingApiKey)?;
        let url = format!("{}/{path}", self.base_url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key.expose_secret())
            .json(body)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(provider, error = %e, "upstream request failed");
                LlmError::Upstream(e.to_string())
            })?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(provider, status = %status, "upstream returned error");
            return Err(LlmError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(format!("failed to parse response: {e}")))
    }
}
