use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use url::Url;

use crate::{error::SttError, http_client::http_client, types::TranscriptionRequest};

use super::SttProvider;

const DEFAULT_WATSON_STT_URL: &str = "https://api.us-south.speech-to-text.watson.cloud.ibm.com";

/// IBM Watson Speech to Text provider
pub(crate) struct WatsonSttProvider {
    client: Client,
    base_url: String,
    api_key: Option<SecretString>,
    model: String,
    timeout: Duration,
}

impl WatsonSttProvider {
    pub fn new(api_key: Option<SecretString>, base_url: Option<&Url>, model: String, timeout: Duration) -> Self {
        let base_url = base_url
            .map_or(DEFAULT_WATSON_STT_URL, Url::as_str)
            .trim_end_matches('/')
            .to_string();

        Self {
            client: http_client(),
            base_url,
            api_key,
            model,
            timeout,
        }
    }
}

#[derive(serde::Deserialize)]
struct RecognizeResponse {
    #[serde(default)]
    results: Vec<RecognizeResult>,
}

#[derive(serde::Deserialize)]
struct RecognizeResult {
    #[serde(default)]
    alternatives: Vec<RecognizeAlternative>,
}

#[derive(serde::Deserialize)]
struct RecognizeAlternative {
    #[serde(default)]
    transcript: String,
}

/// Join the top alternative of every result segment
fn best_transcript(response: &RecognizeResponse) -> String {
    response
        .results
        .iter()
        .filter_map(|result| result.alternatives.first())
        .map(|alternative| alternative.transcript.trim())
        .filter(|transcript| !transcript.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[async_trait]
impl SttProvider for WatsonSttProvider {
    async fn transcribe(&self, request: TranscriptionRequest) -> crate::error::Result<String> {
        let url = format!("{}/v1/recognize", self.base_url);

        tracing::debug!(
            "Watson recognize request: {} bytes, model={}",
            request.audio.len(),
            self.model,
        );

        let mut builder = self
            .client
            .post(&url)
            .query(&[("model", self.model.as_str())])
            .timeout(self.timeout);

        if let Some(content_type) = &request.content_type {
            builder = builder.header(http::header::CONTENT_TYPE, content_type);
        }

        if let Some(api_key) = &self.api_key {
            builder = builder.basic_auth("apikey", Some(api_key.expose_secret()));
        }

        let response = builder.body(request.audio).send().await.map_err(|e| {
            tracing::error!("Watson recognize request failed: {e}");
            SttError::ConnectionError(format!("Failed to send request to Watson STT: {e}"))
        })?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());

            tracing::error!("Watson STT API error ({status}): {error_text}");

            return Err(SttError::ProviderApiError {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let result: RecognizeResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Watson STT response: {e}");
            SttError::InvalidResponse(e.to_string())
        })?;

        let transcript = best_transcript(&result);

        tracing::debug!("Watson transcription complete, {} chars", transcript.len());

        Ok(transcript)
    }

    fn name(&self) -> &str {
        "watson"
    }
}
