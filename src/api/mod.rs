//! API module providing the portal's HTTP endpoints.
//!
//! This module is organized into submodules:
//! - `auth` - OAuth token-exchange endpoint (/api/auth/callback)
//! - `pages` - Root layout and landing page (/)
//! - `health` - Health check endpoint (/healthz)

pub mod auth;
pub mod health;
pub mod pages;

use crate::AppResources;
use axum::{
    Extension, Router,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the portal router with all middleware layers attached.
pub fn router(resources: AppResources) -> Router {
    Router::new()
        .route("/", get(pages::landing))
        .route("/healthz", get(health::health))
        .route("/api/auth/callback", post(auth::callback))
        .layer(Extension(resources))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Starts the web server with all configured routes.
#[tracing::instrument(skip(resources))]
pub async fn start_webserver(resources: AppResources) -> color_eyre::Result<()> {
    let addr = resources.config.bind_addr.clone();
    let app = router(resources);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "Server running");
    axum::serve(listener, app)
        .await
        .map_err(|e| color_eyre::Report::msg(format!("Failed to start server: {e}")))?;

    Ok(())
}
