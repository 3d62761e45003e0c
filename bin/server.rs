// jakal - Web Server
// REST API for Javanese calendar conversion with Axum

use anyhow::{Context, Result};
use jakal::{api, logging, ServerConfig, VERSION};
use std::net::SocketAddr;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServerConfig::from_env()?;
    logging::init(&config);

    let addr = config.bind_addr();
    tracing::info!(
        version = VERSION,
        cache_ttl_secs = config.cache_ttl.as_secs(),
        max_range_days = config.max_range_days,
        "🌐 jakal server starting"
    );

    let state = api::AppState::new(config);
    let app = api::create_router(state);

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("🚀 Listening on http://{}", addr);

    // peer addresses feed the per-IP rate limiter
    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("✅ Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
