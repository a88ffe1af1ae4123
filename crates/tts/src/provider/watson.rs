use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use url::Url;

use crate::{error::TtsError, http_client::http_client, types::VoiceEntry, voice::VoiceId};

use super::TtsProvider;

const DEFAULT_WATSON_TTS_URL: &str = "https://api.us-south.text-to-speech.watson.cloud.ibm.com";

/// Output file name hint, Watson derives the container from its extension
const OUTPUT_HINT: &str = "output_text.wav";

/// IBM Watson Text to Speech provider
pub(crate) struct WatsonTtsProvider {
    client: Client,
    base_url: String,
    api_key: Option<SecretString>,
    timeout: Duration,
    voices_timeout: Duration,
}

impl WatsonTtsProvider {
    pub fn new(
        api_key: Option<SecretString>,
        base_url: Option<&Url>,
        timeout: Duration,
        voices_timeout: Duration,
    ) -> Self {
        let base_url = base_url
            .map_or(DEFAULT_WATSON_TTS_URL, Url::as_str)
            .trim_end_matches('/')
            .to_string();

        Self {
            client: http_client(),
            base_url,
            api_key,
            timeout,
            voices_timeout,
        }
    }

    fn authorize(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_key {
            Some(api_key) => builder.basic_auth("apikey", Some(api_key.expose_secret())),
            None => builder,
        }
    }
}

#[derive(serde::Serialize)]
struct SynthesizeRequest<'a> {
    text: &'a str,
}

#[derive(serde::Deserialize)]
struct VoicesResponse {
    #[serde(default)]
    voices: Vec<WatsonVoice>,
}

#[derive(serde::Deserialize)]
struct WatsonVoice {
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    language: String,
}

impl From<WatsonVoice> for VoiceEntry {
    fn from(voice: WatsonVoice) -> Self {
        let label = voice
            .description
            .filter(|description| !description.trim().is_empty())
            .unwrap_or_else(|| voice.name.clone());

        Self {
            name: voice.name,
            label,
            language: voice.language,
        }
    }
}

#[async_trait]
impl TtsProvider for WatsonTtsProvider {
    async fn synthesize(&self, text: &str, voice: &VoiceId) -> crate::error::Result<Vec<u8>> {
        let url = format!("{}/v1/synthesize", self.base_url);

        tracing::debug!("Watson TTS request: voice={voice}, input_len={}", text.len());

        let mut query = vec![("output", OUTPUT_HINT)];
        if let Some(id) = voice.as_query() {
            query.push(("voice", id));
        }

        let builder = self
            .client
            .post(&url)
            .query(&query)
            .header(http::header::ACCEPT, "audio/wav")
            .json(&SynthesizeRequest { text })
            .timeout(self.timeout);

        let response = self.authorize(builder).send().await.map_err(|e| {
            tracing::warn!(voice = %voice, error = %e, "Watson TTS request failed");
            TtsError::ConnectionError(format!("Failed to send request to Watson TTS: {e}"))
        })?;

        let status = response.status();

        let audio = response.bytes().await.map_err(|e| {
            tracing::warn!(status = %status, voice = %voice, error = %e, "Failed to read Watson TTS response body");
            TtsError::ConnectionError(format!("Failed to read Watson TTS response: {e}"))
        })?;

        if status != StatusCode::OK || audio.is_empty() {
            tracing::warn!(
                status = %status,
                voice = %voice,
                bytes = audio.len(),
                "Watson TTS returned no usable audio"
            );

            return Err(if status == StatusCode::OK {
                TtsError::EmptyAudio
            } else {
                TtsError::ProviderApiError {
                    status: status.as_u16(),
                    message: String::from_utf8_lossy(&audio).into_owned(),
                }
            });
        }

        tracing::debug!("Watson TTS synthesis complete, {} bytes", audio.len());

        Ok(audio.to_vec())
    }

    async fn list_voices(&self) -> crate::error::Result<Vec<VoiceEntry>> {
        let url = format!("{}/v1/voices", self.base_url);

        let builder = self.client.get(&url).timeout(self.voices_timeout);

        let response = self.authorize(builder).send().await.map_err(|e| {
            tracing::error!("Watson voices request failed: {e}");
            TtsError::ConnectionError(format!("Failed to send request to Watson TTS: {e}"))
        })?;

        let status = response.status();

        if status != StatusCode::OK {
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());

            tracing::error!("Watson voices API error ({status}): {error_text}");

            return Err(TtsError::ProviderApiError {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let result: VoicesResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Watson voices response: {e}");
            TtsError::InvalidResponse(e.to_string())
        })?;

        Ok(result.voices.into_iter().map(VoiceEntry::from).collect())
    }

    fn name(&self) -> &str {
        "watson"
    }
}
