pub(crate) mod watson;

use async_trait::async_trait;

use crate::types::TranscriptionRequest;

/// Trait for STT provider implementations
#[async_trait]
pub(crate) trait SttProvider: Send + Sync {
    /// Transcribe audio to text
    async fn transcribe(&self, request: TranscriptionRequest) -> crate::error::Result<String>;

    /// Get the provider name
    fn name(&self) -> &str;
}
