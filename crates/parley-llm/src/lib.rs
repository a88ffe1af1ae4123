//! Assistant reply generation over `OpenAI`-compatible completion APIs

#![allow(clippy::must_use_candidate, clippy::module_name_repetitions)]

mod error;
mod generator;
mod http_client;
pub mod protocol;
pub mod provider;
mod types;

use std::sync::Arc;

pub use error::LlmError;
pub use generator::{CLARIFICATION, PROVIDER_ERROR_PREFIX, ReplyGenerator};
pub use provider::ReplyProvider;
pub use types::{Completion, CompletionRequest};

/// Build the shared reply generator from configuration
///
/// # Errors
///
/// Returns an error if the generator fails to initialize
pub fn build_generator(config: &parley_config::Config) -> anyhow::Result<Arc<ReplyGenerator>> {
    let generator = ReplyGenerator::from_config(&config.llm)
        .map_err(|e| anyhow::anyhow!("Failed to initialize reply generator: {e}"))?;
    Ok(Arc::new(generator))
}
