mod cors;
mod process;

use std::net::SocketAddr;

use axum::{
    Router,
    routing::{get, post},
};
use parley_config::Config;
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

pub use process::{MessageResponse, ProcessError};

/// Assembled server with all routes and middleware
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the server from configuration
    ///
    /// Provider clients and the fallback clip are created here, once.
    ///
    /// # Errors
    ///
    /// Returns an error if STT, TTS or reply generator initialization fails
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let listen_address = config.server.listen_address;

        let stt_state = stt::build_server(config)?;
        let tts_state = tts::build_server(config)?;
        let generator = parley_llm::build_generator(config)?;

        let process_state = process::ProcessState {
            generator,
            tts: tts_state.clone(),
        };

        let static_dir = &config.server.static_dir;

        let mut app = Router::new()
            .route_service("/", ServeFile::new(static_dir.join("index.html")))
            .nest_service("/static", ServeDir::new(static_dir));

        if config.server.health.enabled {
            app = app.route(&config.server.health.path, get(health_handler));
        }

        app = app
            .merge(stt::endpoint_router().with_state(stt_state))
            .merge(tts::endpoint_router().with_state(tts_state))
            .merge(
                Router::new()
                    .route("/process-message", post(process::process_message))
                    .with_state(process_state),
            );

        app = app.layer(TraceLayer::new_for_http());
        app = app.layer(cors::cors_layer(&config.server.cors));

        tracing::debug!(static_dir = %static_dir.display(), "routes assembled");

        Ok(Self {
            router: app,
            listen_address,
        })
    }

    /// Get the configured listen address
    #[must_use]
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}

async fn health_handler() -> &'static str {
    "ok"
}
