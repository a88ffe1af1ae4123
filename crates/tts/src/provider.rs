pub(crate) mod watson;

use async_trait::async_trait;

use crate::{types::VoiceEntry, voice::VoiceId};

/// Trait for TTS provider implementations
#[async_trait]
pub(crate) trait TtsProvider: Send + Sync {
    /// Synthesize text to WAV audio
    ///
    /// Returns an error for anything other than a 200 carrying audio.
    async fn synthesize(&self, text: &str, voice: &VoiceId) -> crate::error::Result<Vec<u8>>;

    /// List the voices offered by the provider
    async fn list_voices(&self) -> crate::error::Result<Vec<VoiceEntry>>;

    /// Get the provider name
    fn name(&self) -> &str;
}
