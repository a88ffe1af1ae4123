use std::path::Path;

use url::Url;

use crate::Config;

/// Sample rates a 16-bit mono WAV player is expected to handle
const SAMPLE_RATE_RANGE: std::ops::RangeInclusive<u32> = 8_000..=48_000;

/// Longest fallback clip, in milliseconds
const MAX_FALLBACK_MS: u64 = 10_000;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        Self::from_toml(&raw)
    }

    /// Parse and validate configuration from TOML text
    ///
    /// # Errors
    ///
    /// Returns an error if expansion, parsing or validation fails
    pub fn from_toml(raw: &str) -> anyhow::Result<Self> {
        let expanded =
            crate::env::expand_env(raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if a duration, URL, or audio setting is unusable
    pub fn validate(&self) -> anyhow::Result<()> {
        self.validate_timeouts()?;
        self.validate_base_urls()?;
        self.validate_llm_config()?;
        self.validate_fallback_audio()?;
        self.validate_telemetry()?;
        Ok(())
    }

    fn validate_timeouts(&self) -> anyhow::Result<()> {
        self.stt.timeout()?;
        self.llm.timeout()?;
        self.tts.timeout()?;
        self.tts.voices_timeout()?;
        Ok(())
    }

    fn validate_base_urls(&self) -> anyhow::Result<()> {
        let urls = [
            ("stt.base_url", self.stt.base_url.as_ref()),
            ("llm.base_url", self.llm.base_url.as_ref()),
            ("tts.base_url", self.tts.base_url.as_ref()),
        ];

        for (field, url) in urls {
            if let Some(url) = url {
                ensure_http(field, url)?;
            }
        }

        Ok(())
    }

    fn validate_llm_config(&self) -> anyhow::Result<()> {
        if self.llm.model.trim().is_empty() {
            anyhow::bail!("llm.model must not be empty");
        }

        if self.llm.max_tokens == 0 {
            anyhow::bail!("llm.max_tokens must be greater than 0");
        }

        Ok(())
    }

    fn validate_fallback_audio(&self) -> anyhow::Result<()> {
        let fallback = &self.tts.fallback;

        if !SAMPLE_RATE_RANGE.contains(&fallback.sample_rate) {
            anyhow::bail!(
                "tts.fallback.sample_rate must be between {} and {} Hz, got {}",
                SAMPLE_RATE_RANGE.start(),
                SAMPLE_RATE_RANGE.end(),
                fallback.sample_rate
            );
        }

        if fallback.duration_ms == 0 || fallback.duration_ms > MAX_FALLBACK_MS {
            anyhow::bail!(
                "tts.fallback.duration_ms must be between 1 and {MAX_FALLBACK_MS}, got {}",
                fallback.duration_ms
            );
        }

        Ok(())
    }

    fn validate_telemetry(&self) -> anyhow::Result<()> {
        let Some(ref telemetry) = self.telemetry else {
            return Ok(());
        };

        if !(0.0..=1.0).contains(&telemetry.sampling_rate) {
            anyhow::bail!("telemetry.sampling_rate must be between 0.0 and 1.0");
        }

        Ok(())
    }
}

fn ensure_http(field: &str, url: &Url) -> anyhow::Result<()> {
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => anyhow::bail!("{field} must use http or https, got '{other}'"),
    }
}
