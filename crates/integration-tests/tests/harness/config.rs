//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;
use std::path::Path;

use parley_config::{CompletionApi, Config, CorsConfig};
use secrecy::SecretString;

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with minimal defaults
    pub fn new() -> Self {
        let mut config = Config::default();
        config.server.listen_address = SocketAddr::from(([127, 0, 0, 1], 0));

        Self { config }
    }

    /// Point STT, TTS and the voice listing at a mock Watson backend
    pub fn with_watson(mut self, base_url: &str) -> Self {
        let url = base_url.parse().expect("valid URL");

        self.config.stt.base_url = Some(url);
        self.config.stt.api_key = Some(SecretString::from("stt-test-key"));
        self.config.tts.base_url = self.config.stt.base_url.clone();
        self.config.tts.api_key = Some(SecretString::from("tts-test-key"));
        self
    }

    /// Point the reply generator at a mock chat completions backend
    pub fn with_chat_llm(self, base_url: &str) -> Self {
        self.with_llm(CompletionApi::Chat, base_url)
    }

    /// Point the reply generator at a mock legacy completions backend
    pub fn with_legacy_llm(self, base_url: &str) -> Self {
        self.with_llm(CompletionApi::Legacy, base_url)
    }

    fn with_llm(mut self, api: CompletionApi, base_url: &str) -> Self {
        self.config.llm.api = api;
        self.config.llm.base_url = Some(base_url.parse().expect("valid URL"));
        self.config.llm.api_key = Some(SecretString::from("test-key"));
        self
    }

    /// Serve the front-end from `dir`
    pub fn with_static_dir(mut self, dir: &Path) -> Self {
        self.config.server.static_dir = dir.to_path_buf();
        self
    }

    /// Set CORS configuration
    pub fn with_cors(mut self, config: CorsConfig) -> Self {
        self.config.server.cors = config;
        self
    }

    /// Disable health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config
    }
}
