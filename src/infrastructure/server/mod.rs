//! HTTP server exposing the manifest, bindings and command calls

pub mod extract;
pub mod routes;

use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::application::errors::ServerError;
use crate::application::services::{BindingCatalog, CommandDispatcher};
use crate::domain::traits::Platform;
use crate::infrastructure::config::Config;
use crate::infrastructure::manifest::Manifest;

/// Shared, read-only state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Arc<CommandDispatcher>,
    pub manifest: Arc<Manifest>,
    pub bindings: Arc<BindingCatalog>,
}

impl AppState {
    pub fn new(config: &Config, platform: Arc<dyn Platform>) -> Self {
        Self {
            dispatcher: Arc::new(CommandDispatcher::new(platform)),
            manifest: Arc::new(Manifest::new(config)),
            bindings: Arc::new(BindingCatalog::new()),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        // Static assets
        .route("/manifest.json", get(routes::manifest))
        .route("/static/icon.png", get(routes::icon))
        .route("/bindings", get(routes::bindings).post(routes::bindings))
        // Command calls
        .route("/help", post(routes::help))
        .route("/list", post(routes::list))
        .route("/preview", post(routes::preview))
        .route("/set_channel_welcome", post(routes::set_channel_welcome))
        .route("/get_channel_welcome", post(routes::get_channel_welcome))
        .route("/delete_channel_welcome", post(routes::delete_channel_welcome))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Bind the configured address and serve until Ctrl-C
pub async fn serve(config: &Config, state: AppState) -> Result<(), ServerError> {
    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Welcome Bot listening on http://{}", addr);
    tracing::info!(
        "Use '/apps install http {}' to install the app",
        config.manifest_url()
    );

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
