use std::{fmt, sync::OnceLock};

use regex::Regex;

/// Voice selection for a synthesis call
///
/// Only ids shaped like `en-US_MichaelV3Voice` are forwarded. Anything else,
/// including display labels picked from a stale dropdown, lets the provider
/// choose its own default voice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoiceId {
    /// No explicit voice, provider default
    Default,
    /// Provider-specific voice id
    Named(String),
}

impl VoiceId {
    /// Sentinel accepted from clients for "provider default"
    pub const DEFAULT: &'static str = "default";

    pub fn parse(raw: &str) -> Self {
        fn id_pattern() -> &'static Regex {
            static RE: OnceLock<Regex> = OnceLock::new();
            // <language>-<REGION>_<Name>Voice
            RE.get_or_init(|| Regex::new(r"^[a-z]{2,3}-[A-Z]{2}_[A-Za-z0-9]+Voice$").expect("voice id pattern is valid"))
        }

        if raw != Self::DEFAULT && id_pattern().is_match(raw) {
            Self::Named(raw.to_owned())
        } else {
            Self::Default
        }
    }

    /// Value for the `voice` query parameter, `None` for the provider default
    pub fn as_query(&self) -> Option<&str> {
        match self {
            Self::Default => None,
            Self::Named(id) => Some(id),
        }
    }
}

impl fmt::Display for VoiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_query().unwrap_or(Self::DEFAULT))
    }
}
