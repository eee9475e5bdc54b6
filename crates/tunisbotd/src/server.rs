//! HTTP server for tunisbotd

use crate::routes;
use anyhow::Result;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tunisbot_shared::TunisBot;

/// Application state shared across handlers
pub struct AppState {
    pub bot: Arc<TunisBot>,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(bot: TunisBot) -> Self {
        Self {
            bot: Arc::new(bot),
            start_time: Instant::now(),
        }
    }
}

/// Build the router with every API route
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::chat_routes())
        .merge(routes::history_routes())
        .merge(routes::health_routes())
        .with_state(Arc::new(state))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Serve until Ctrl-C
pub async fn run(state: AppState, addr: SocketAddr) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutting down gracefully");
}
