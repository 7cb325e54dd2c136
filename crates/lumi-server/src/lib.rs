#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

//! HTTP surface of Lumi: routes, error boundary and server lifecycle

mod cors;
mod error;
mod handlers;
mod health;
mod http_client;
mod pipeline;
mod request;
mod state;
mod types;

use std::net::SocketAddr;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use lumi_config::Config;
use tower_http::trace::TraceLayer;

pub use error::ApiError;
pub use http_client::http_client;
pub use pipeline::SUMMARY_FALLBACK;
pub use state::AppState;
pub use types::SummaryPayload;

/// Create the router for the summary and search endpoints
pub fn endpoint_router() -> Router<AppState> {
    Router::new()
        .route("/summarize", post(handlers::summarize))
        .route("/search_book", get(handlers::search_book))
        .route("/summarize_book", post(handlers::summarize_book))
}

/// Assembled server with all routes and middleware
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the server and its upstream providers from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the upstream HTTP client cannot be built
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let state = AppState::from_config(config)?;
        Ok(Self::with_state(config, state))
    }

    /// Build the server around already constructed providers
    pub fn with_state(config: &Config, state: AppState) -> Self {
        let mut app = Router::new();

        // Health check
        if config.server.health.enabled {
            app = app.route(&config.server.health.path, get(health::health_handler));
        }

        app = app.merge(endpoint_router().with_state(state));

        // Apply middleware layers (innermost first)
        app = app.layer(DefaultBodyLimit::max(config.server.upload_limit));
        app = app.layer(TraceLayer::new_for_http());
        app = app.layer(cors::cors_layer(&config.server.cors));

        Self {
            router: app,
            listen_address: config.server.listen_address,
        }
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
