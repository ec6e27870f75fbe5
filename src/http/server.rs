//! HTTP server
//!
//! Binds the listener and serves the router with graceful shutdown.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::store::DocumentStore;

use super::handlers::AppState;
use super::routes::create_router;

/// HTTP server for the movies service
pub struct HttpServer {
    config: Config,
    store: Arc<dyn DocumentStore>,
}

impl HttpServer {
    /// Create a new HTTP server
    pub fn new(config: Config, store: Arc<dyn DocumentStore>) -> Self {
        Self { config, store }
    }

    /// Run the HTTP server until the shutdown channel fires
    pub async fn run(&self, mut shutdown: broadcast::Receiver<()>) -> Result<()> {
        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.port));

        let app_state = AppState {
            store: self.store.clone(),
        };

        let app = create_router(app_state).layer(TraceLayer::new_for_http());

        let listener = TcpListener::bind(&addr)
            .await
            .context("Failed to bind HTTP server")?;

        info!("main URL http://localhost:{}/", self.config.port);

        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                info!("HTTP server shutting down");
            })
            .await
            .context("HTTP server error")?;

        Ok(())
    }
}
