use parley_config::TtsProviderType;

use crate::{
    error::TtsError,
    provider::{TtsProvider, watson::WatsonTtsProvider},
    types::VoiceEntry,
    voice::VoiceId,
    wav::silent_wav,
};

/// TTS server wrapping the configured provider and the fallback clip
pub struct Server {
    provider: Box<dyn TtsProvider>,
    fallback: Vec<u8>,
}

impl Server {
    /// Synthesize `text` with the requested voice
    ///
    /// Never fails: when the provider does not return audio the silent
    /// fallback clip is returned instead, so the caller always has a
    /// playable WAV.
    pub async fn synthesize(&self, text: &str, voice: &str) -> Vec<u8> {
        // Watson rejects an empty text field
        let text = if text.is_empty() { " " } else { text };
        let voice = VoiceId::parse(voice);

        match self.provider.synthesize(text, &voice).await {
            Ok(audio) => audio,
            Err(e) => {
                tracing::debug!(
                    provider = self.provider.name(),
                    error = %e,
                    "returning silent fallback"
                );
                self.fallback.clone()
            }
        }
    }

    /// List the provider's voices, sorted by name
    pub async fn list_voices(&self) -> crate::error::Result<Vec<VoiceEntry>> {
        let mut voices = self.provider.list_voices().await?;
        voices.sort_by(|a, b| a.name.cmp(&b.name));

        tracing::debug!("Listed {} voices from '{}'", voices.len(), self.provider.name());

        Ok(voices)
    }

    /// Silent clip used when synthesis fails
    pub fn fallback_audio(&self) -> &[u8] {
        &self.fallback
    }
}

/// Builder for constructing the TTS server from configuration
pub struct TtsServerBuilder<'a> {
    config: &'a parley_config::Config,
}

impl<'a> TtsServerBuilder<'a> {
    pub const fn new(config: &'a parley_config::Config) -> Self {
        Self { config }
    }

    pub fn build(self) -> crate::error::Result<Server> {
        let tts = &self.config.tts;
        let timeout = tts.timeout().map_err(|e| TtsError::ConfigError(e.to_string()))?;
        let voices_timeout = tts.voices_timeout().map_err(|e| TtsError::ConfigError(e.to_string()))?;

        let fallback = silent_wav(tts.fallback.duration(), tts.fallback.sample_rate)?;

        let provider: Box<dyn TtsProvider> = match tts.provider_type {
            TtsProviderType::Watson => Box::new(WatsonTtsProvider::new(
                tts.api_key.clone(),
                tts.base_url.as_ref(),
                timeout,
                voices_timeout,
            )),
        };

        tracing::debug!(
            "TTS server initialized with provider '{}', fallback clip {} bytes",
            provider.name(),
            fallback.len()
        );

        Ok(Server { provider, fallback })
    }
}

#[cfg(test)]
mod tests {
    use std::{
        io::Cursor,
        sync::{Arc, Mutex},
        time::Duration,
    };

    use async_trait::async_trait;

    use super::*;

    /// Records what it was asked and answers with a fixed result
    #[derive(Default)]
    struct StubProvider {
        audio: Option<Vec<u8>>,
        voices: Vec<VoiceEntry>,
        calls: Arc<Mutex<Vec<(String, VoiceId)>>>,
    }

    #[async_trait]
    impl TtsProvider for StubProvider {
        async fn synthesize(&self, text: &str, voice: &VoiceId) -> crate::error::Result<Vec<u8>> {
            self.calls.lock().unwrap().push((text.to_owned(), voice.clone()));
            self.audio.clone().ok_or(TtsError::ProviderApiError {
                status: 500,
                message: "boom".into(),
            })
        }

        async fn list_voices(&self) -> crate::error::Result<Vec<VoiceEntry>> {
            if self.voices.is_empty() {
                return Err(TtsError::ConnectionError("connection refused".into()));
            }
            Ok(self.voices.clone())
        }

        fn name(&self) -> &str {
            "stub"
        }
    }

    fn server(provider: StubProvider) -> Server {
        Server {
            provider: Box::new(provider),
            fallback: silent_wav(Duration::from_millis(300), 16_000).unwrap(),
        }
    }

    fn voice(name: &str) -> VoiceEntry {
        VoiceEntry {
            name: name.into(),
            label: name.into(),
            language: "en-US".into(),
        }
    }

    #[tokio::test]
    async fn provider_audio_is_returned_verbatim() {
        let server = server(StubProvider {
            audio: Some(b"RIFF-from-provider".to_vec()),
            ..Default::default()
        });

        assert_eq!(server.synthesize("hello", "default").await, b"RIFF-from-provider");
    }

    #[tokio::test]
    async fn failure_yields_playable_fallback() {
        let server = server(StubProvider::default());

        let audio = server.synthesize("hello", "en-US_MichaelV3Voice").await;
        assert_eq!(audio, server.fallback_audio());

        let reader = hound::WavReader::new(Cursor::new(&audio)).unwrap();
        assert_eq!(reader.spec().sample_rate, 16_000);
        assert_eq!(reader.duration(), 4_800);
    }

    #[tokio::test]
    async fn empty_text_is_sent_as_space() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let server = server(StubProvider {
            audio: Some(vec![1]),
            calls: Arc::clone(&calls),
            ..Default::default()
        });

        server.synthesize("", "default").await;

        assert_eq!(calls.lock().unwrap()[0].0, " ");
    }

    #[tokio::test]
    async fn voice_is_validated_before_reaching_provider() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let server = server(StubProvider {
            audio: Some(vec![1]),
            calls: Arc::clone(&calls),
            ..Default::default()
        });

        server.synthesize("hi", "en-GB_KateV3Voice").await;
        server.synthesize("hi", "Kate: British English").await;
        server.synthesize("hi", "default").await;

        let voices: Vec<VoiceId> = calls.lock().unwrap().iter().map(|(_, v)| v.clone()).collect();
        assert_eq!(
            voices,
            vec![
                VoiceId::Named("en-GB_KateV3Voice".into()),
                VoiceId::Default,
                VoiceId::Default
            ]
        );
    }

    #[tokio::test]
    async fn voices_are_sorted_by_name() {
        let server = server(StubProvider {
            voices: vec![voice("fr-FR_ReneeV3Voice"), voice("de-DE_BirgitV3Voice"), voice("en-US_LisaV3Voice")],
            ..Default::default()
        });

        let names: Vec<String> = server.list_voices().await.unwrap().into_iter().map(|v| v.name).collect();
        assert_eq!(names, ["de-DE_BirgitV3Voice", "en-US_LisaV3Voice", "fr-FR_ReneeV3Voice"]);
    }

    #[tokio::test]
    async fn voice_listing_errors_propagate() {
        let server = server(StubProvider::default());
        assert!(matches!(server.list_voices().await, Err(TtsError::ConnectionError(_))));
    }

    #[test]
    fn builder_encodes_configured_fallback() {
        let mut config = parley_config::Config::default();
        config.tts.fallback.duration_ms = 100;
        config.tts.fallback.sample_rate = 8_000;

        let server = TtsServerBuilder::new(&config).build().unwrap();
        let reader = hound::WavReader::new(Cursor::new(server.fallback_audio())).unwrap();

        assert_eq!(reader.spec().sample_rate, 8_000);
        assert_eq!(reader.duration(), 800);
    }

    #[test]
    fn builder_rejects_bad_timeout() {
        let mut config = parley_config::Config::default();
        config.tts.voices_timeout = "whenever".into();

        let result = TtsServerBuilder::new(&config).build();
        assert!(matches!(result, Err(TtsError::ConfigError(_))));
    }
}
