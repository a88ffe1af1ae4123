use parley_config::SttProviderType;

use crate::{
    error::SttError,
    provider::{SttProvider, watson::WatsonSttProvider},
    types::TranscriptionRequest,
};

/// STT server wrapping the configured provider
pub struct Server {
    provider: Box<dyn SttProvider>,
}

impl Server {
    /// Transcribe audio, degrading to an empty transcript on any failure
    ///
    /// Provider errors are logged and never surface to the caller: an empty
    /// string reads as "nothing recognized" to the front-end.
    pub async fn transcribe(&self, request: TranscriptionRequest) -> String {
        let audio_len = request.audio.len();

        match self.provider.transcribe(request).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(
                    provider = self.provider.name(),
                    audio_bytes = audio_len,
                    error = %e,
                    "transcription failed, returning empty transcript"
                );
                String::new()
            }
        }
    }
}

/// Builder for constructing the STT server from configuration
pub struct SttServerBuilder<'a> {
    config: &'a parley_config::Config,
}

impl<'a> SttServerBuilder<'a> {
    pub const fn new(config: &'a parley_config::Config) -> Self {
        Self { config }
    }

    pub fn build(self) -> crate::error::Result<Server> {
        let stt = &self.config.stt;
        let timeout = stt.timeout().map_err(|e| SttError::ConfigError(e.to_string()))?;

        let provider: Box<dyn SttProvider> = match stt.provider_type {
            SttProviderType::Watson => Box::new(WatsonSttProvider::new(
                stt.api_key.clone(),
                stt.base_url.as_ref(),
                stt.model.clone(),
                timeout,
            )),
        };

        tracing::debug!("STT server initialized with provider '{}'", provider.name());

        Ok(Server { provider })
    }
}
