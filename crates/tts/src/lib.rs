#![allow(
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::module_name_repetitions
)]

mod error;
mod http_client;
mod provider;
mod server;
mod types;
mod voice;
mod wav;

use std::sync::Arc;

use axum::{Json, Router, extract::State, routing::get};

pub use error::{Result, TtsError};
pub use server::{Server, TtsServerBuilder};
pub use types::VoiceEntry;
pub use voice::VoiceId;
pub use wav::silent_wav;

/// Build the TTS server from configuration
///
/// # Errors
///
/// Returns an error if the server fails to initialize
pub fn build_server(config: &parley_config::Config) -> anyhow::Result<Arc<Server>> {
    let server = Arc::new(
        TtsServerBuilder::new(config)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to initialize TTS server: {e}"))?,
    );
    Ok(server)
}

/// Create the endpoint router for the voice catalog
pub fn endpoint_router() -> Router<Arc<Server>> {
    Router::new().route("/voices", get(list_voices))
}

/// Handle voice catalog requests
async fn list_voices(State(server): State<Arc<Server>>) -> Result<Json<Vec<VoiceEntry>>> {
    let voices = server.list_voices().await?;
    Ok(Json(voices))
}
