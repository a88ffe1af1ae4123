use std::time::Duration;

use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

/// Text-to-speech provider configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TtsConfig {
    /// Provider type
    #[serde(rename = "type", default)]
    pub provider_type: TtsProviderType,
    /// API key, sent as `apikey` basic auth when present
    #[serde(default)]
    pub api_key: Option<SecretString>,
    /// Base URL override
    #[serde(default)]
    pub base_url: Option<Url>,
    /// Per-call timeout for synthesis
    #[serde(default = "default_timeout")]
    pub timeout: String,
    /// Per-call timeout for the voice listing
    #[serde(default = "default_voices_timeout")]
    pub voices_timeout: String,
    /// Silent clip returned when synthesis fails
    #[serde(default)]
    pub fallback: FallbackAudioConfig,
}

impl Default for TtsConfig {
    fn default() -> Self {
        Self {
            provider_type: TtsProviderType::default(),
            api_key: None,
            base_url: None,
            timeout: default_timeout(),
            voices_timeout: default_voices_timeout(),
            fallback: FallbackAudioConfig::default(),
        }
    }
}

impl TtsConfig {
    /// Parsed synthesis timeout
    ///
    /// # Errors
    ///
    /// Returns an error if `timeout` is not a valid duration
    pub fn timeout(&self) -> anyhow::Result<Duration> {
        crate::parse_duration("tts.timeout", &self.timeout)
    }

    /// Parsed voice listing timeout
    ///
    /// # Errors
    ///
    /// Returns an error if `voices_timeout` is not a valid duration
    pub fn voices_timeout(&self) -> anyhow::Result<Duration> {
        crate::parse_duration("tts.voices_timeout", &self.voices_timeout)
    }
}

/// Supported TTS providers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TtsProviderType {
    /// IBM Watson Text to Speech
    #[default]
    Watson,
}

/// Shape of the silent fallback clip
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FallbackAudioConfig {
    /// Clip length in milliseconds
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,
    /// Sample rate in Hz
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,
}

impl Default for FallbackAudioConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_duration_ms(),
            sample_rate: default_sample_rate(),
        }
    }
}

impl FallbackAudioConfig {
    pub const fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

fn default_timeout() -> String {
    "60s".to_string()
}

fn default_voices_timeout() -> String {
    "15s".to_string()
}

#[allow(clippy::missing_const_for_fn)]
fn default_duration_ms() -> u64 {
    300
}

#[allow(clippy::missing_const_for_fn)]
fn default_sample_rate() -> u32 {
    16_000
}
