use std::time::Duration;

use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

/// Speech-to-text provider configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SttConfig {
    /// Provider type
    #[serde(rename = "type", default)]
    pub provider_type: SttProviderType,
    /// API key, sent as `apikey` basic auth when present
    #[serde(default)]
    pub api_key: Option<SecretString>,
    /// Base URL override
    #[serde(default)]
    pub base_url: Option<Url>,
    /// Recognition model passed as the `model` query parameter
    #[serde(default = "default_model")]
    pub model: String,
    /// Per-call timeout
    #[serde(default = "default_timeout")]
    pub timeout: String,
}

impl Default for SttConfig {
    fn default() -> Self {
        Self {
            provider_type: SttProviderType::default(),
            api_key: None,
            base_url: None,
            model: default_model(),
            timeout: default_timeout(),
        }
    }
}

impl SttConfig {
    /// Parsed per-call timeout
    ///
    /// # Errors
    ///
    /// Returns an error if `timeout` is not a valid duration
    pub fn timeout(&self) -> anyhow::Result<Duration> {
        crate::parse_duration("stt.timeout", &self.timeout)
    }
}

/// Supported STT providers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SttProviderType {
    /// IBM Watson Speech to Text
    #[default]
    Watson,
}

fn default_model() -> String {
    "en-US_Multimedia".to_string()
}

fn default_timeout() -> String {
    "60s".to_string()
}
