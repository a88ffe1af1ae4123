#![allow(clippy::must_use_candidate)]

pub mod cors;
mod env;
pub mod health;
pub mod llm;
mod loader;
pub mod server;
pub mod stt;
pub mod telemetry;
pub mod tts;

use std::time::Duration;

use serde::Deserialize;

pub use cors::*;
pub use health::*;
pub use llm::*;
pub use server::*;
pub use stt::*;
pub use telemetry::{ExportProtocol, ExporterConfig, LogFormat, TelemetryConfig};
pub use tts::*;

/// Top-level Parley configuration
///
/// Every section has defaults, so an empty file (or no file at all) yields a
/// runnable configuration pointed at the public provider endpoints.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Speech-to-text provider configuration
    #[serde(default)]
    pub stt: SttConfig,
    /// Chat completion provider configuration
    #[serde(default)]
    pub llm: LlmConfig,
    /// Text-to-speech provider configuration
    #[serde(default)]
    pub tts: TtsConfig,
    /// Telemetry configuration
    #[serde(default)]
    pub telemetry: Option<TelemetryConfig>,
}

/// Parse a human duration such as `"15s"` or `"1m 30s"`
pub(crate) fn parse_duration(field: &str, value: &str) -> anyhow::Result<Duration> {
    duration_str::parse(value).map_err(|e| anyhow::anyhow!("invalid duration for {field} '{value}': {e}"))
}
